//! Demographic clause injection into response templates
//!
//! Both injections are no-ops when the text already mentions the relevant
//! demographic, so applying them twice changes nothing.

use crate::nationality::NationalityLabel;
use crate::text::{contains_any, lower_first};
use biasio_core::Gender;

/// Terms whose presence means a text already addresses gender
pub const GENDER_TERMS: &[&str] = &["woman", "women", "female", "man", "men", "male", "nonbinary"];

/// Terms whose presence means a text already addresses nationality
pub const NATIONALITY_TERMS: &[&str] = &[
    "pakistan", "pakistani", "europe", "european", "nationality", "citizenship",
    "passport", "immigrant", "migrant", "visa",
];

/// Which side of the response pair a template belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Prefixed with a "Because you are ..." clause
    Biased,
    /// Suffixed with a "This should apply ..." sentence
    Fair,
}

/// Insert a gender clause unless the text already addresses gender
pub fn inject_gender(text: &str, gender: Option<Gender>, framing: Framing) -> String {
    let Some(gender) = gender else {
        return text.to_string();
    };
    if contains_any(text, GENDER_TERMS) {
        return text.to_string();
    }

    match framing {
        Framing::Biased => format!("Because you are {}, {}", gender.label(), lower_first(text)),
        Framing::Fair => format!("{} This should apply equally if you are {}.", text, gender.label()),
    }
}

/// Insert a nationality clause unless the text already addresses nationality
pub fn inject_nationality(
    text: &str,
    label: Option<NationalityLabel>,
    framing: Framing,
) -> String {
    let Some(label) = label else {
        return text.to_string();
    };
    if contains_any(text, NATIONALITY_TERMS)
        || text.to_lowercase().contains(&label.as_str().to_lowercase())
    {
        return text.to_string();
    }

    match (framing, label) {
        (Framing::Biased, NationalityLabel::Specific(name)) => {
            format!("Because you are {}, {}", name, lower_first(text))
        }
        (Framing::Biased, NationalityLabel::Generic) => {
            format!("Because of your nationality, {}", lower_first(text))
        }
        (Framing::Fair, NationalityLabel::Specific(name)) => {
            format!("{} This should apply regardless of being {}.", text, name)
        }
        (Framing::Fair, NationalityLabel::Generic) => {
            format!("{} This should apply regardless of nationality.", text)
        }
    }
}
