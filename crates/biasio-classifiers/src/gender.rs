//! Gender signal detection

use crate::text::WordSet;
use biasio_core::Gender;

const FEMALE_WORDS: &[&str] = &["female", "woman", "women"];
const MALE_WORDS: &[&str] = &["male", "man", "men"];

/// Detect a gender signal in normalized text
///
/// Checked in priority order: nonbinary (substring), female, male (whole words).
pub fn detect_gender(text: &str, words: &WordSet<'_>) -> Option<Gender> {
    if text.contains("nonbinary") || text.contains("non-binary") {
        return Some(Gender::Nonbinary);
    }
    if words.contains_any(FEMALE_WORDS) {
        return Some(Gender::Female);
    }
    if words.contains_any(MALE_WORDS) {
        return Some(Gender::Male);
    }
    None
}
