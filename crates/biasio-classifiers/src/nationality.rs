//! Nationality label detection

use crate::text::WordSet;
use biasio_core::Region;
use std::fmt;

/// Nationality adjectives and their display labels, in match priority order
pub const NATIONALITY_LABELS: &[(&str, &str)] = &[
    ("pakistani", "Pakistani"),
    ("german", "German"),
    ("french", "French"),
    ("italian", "Italian"),
    ("spanish", "Spanish"),
    ("british", "British"),
    ("polish", "Polish"),
    ("romanian", "Romanian"),
    ("bulgarian", "Bulgarian"),
    ("swedish", "Swedish"),
    ("norwegian", "Norwegian"),
    ("danish", "Danish"),
    ("finnish", "Finnish"),
    ("dutch", "Dutch"),
    ("greek", "Greek"),
    ("irish", "Irish"),
    ("ukrainian", "Ukrainian"),
];

/// Words that signal nationality without naming one
pub const NATIONALITY_KEYWORDS: &[&str] = &[
    "nationality", "citizenship", "passport", "immigrant", "migrant", "visa",
];

/// Nationality a message refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NationalityLabel {
    /// A named nationality ("German", "Pakistani", "European")
    Specific(&'static str),
    /// Nationality is at stake but not named
    Generic,
}

impl NationalityLabel {
    /// Display form of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Specific(label) => label,
            Self::Generic => "your nationality",
        }
    }

    pub fn is_specific(&self) -> bool {
        matches!(self, Self::Specific(_))
    }
}

impl fmt::Display for NationalityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the nationality label for normalized text
pub fn detect_nationality(
    text: &str,
    words: &WordSet<'_>,
    region: Region,
) -> Option<NationalityLabel> {
    if let Some((_, label)) = NATIONALITY_LABELS
        .iter()
        .find(|(adjective, _)| words.contains(adjective))
    {
        return Some(NationalityLabel::Specific(*label));
    }

    if text.contains("work permit") {
        return Some(NationalityLabel::Generic);
    }

    match region {
        Region::Pakistan => Some(NationalityLabel::Specific("Pakistani")),
        Region::Europe => Some(NationalityLabel::Specific("European")),
        Region::General if words.contains_any(NATIONALITY_KEYWORDS) => {
            Some(NationalityLabel::Generic)
        }
        Region::General => None,
    }
}
