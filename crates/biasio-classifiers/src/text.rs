//! Text normalization and word tokenization

use biasio_core::{Error, Result};
use regex::Regex;
use std::collections::HashSet;

/// Canonical form used for all keyword matching: trimmed, lower-cased,
/// internal whitespace runs collapsed to a single space.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lower-case the first character when it is an ASCII capital letter
pub fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            let mut out = String::with_capacity(text.len());
            out.push(first.to_ascii_lowercase());
            out.push_str(chars.as_str());
            out
        }
        _ => text.to_string(),
    }
}

/// Case-insensitive substring check against a list of terms
pub fn contains_any(text: &str, terms: &[&str]) -> bool {
    let lower = text.to_lowercase();
    terms.iter().any(|term| lower.contains(term))
}

/// Splits normalized text into lowercase alphabetic words
#[derive(Debug)]
pub struct WordTokenizer {
    word_regex: Regex,
}

impl WordTokenizer {
    /// Create a new tokenizer
    pub fn new() -> Result<Self> {
        Ok(Self {
            word_regex: Regex::new(r"[a-z]+")
                .map_err(|e| Error::classifier(format!("Failed to compile word regex: {}", e)))?,
        })
    }

    /// Collect the distinct words of `text`
    ///
    /// Only ASCII lowercase runs are words, so callers pass normalized text.
    pub fn word_set<'a>(&self, text: &'a str) -> WordSet<'a> {
        WordSet(self.word_regex.find_iter(text).map(|m| m.as_str()).collect())
    }
}

/// Distinct words of a message
#[derive(Debug, Clone, Default)]
pub struct WordSet<'a>(HashSet<&'a str>);

impl<'a> WordSet<'a> {
    /// Whether `word` occurs as a whole word
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    /// Whether any of `words` occurs as a whole word
    pub fn contains_any(&self, words: &[&str]) -> bool {
        words.iter().any(|word| self.0.contains(word))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for WordSet<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello   World \n\t Again "), "hello world again");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n "), "");
        assert_eq!(normalize("ÜBER   Straße"), "über straße");
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("Hiring should favor"), "hiring should favor");
        assert_eq!(lower_first("already lower"), "already lower");
        assert_eq!(lower_first("\"Quoted\""), "\"Quoted\"");
        assert_eq!(lower_first("Élan"), "Élan");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_contains_any_is_case_insensitive() {
        assert!(contains_any("Because you are a WOMAN", &["woman"]));
        assert!(contains_any("high performance", &["man"]));
        assert!(!contains_any("nothing here", &["visa", "passport"]));
    }

    #[test]
    fn test_word_set() {
        let tokenizer = WordTokenizer::new().unwrap();
        let words = tokenizer.word_set("as a woman, what about pay-gap in germany? 2024");

        assert!(words.contains("woman"));
        assert!(words.contains("germany"));
        assert!(words.contains("pay"));
        assert!(words.contains("gap"));
        assert!(!words.contains("2024"));
        assert!(!words.contains("man"));
        assert!(words.contains_any(&["berlin", "germany"]));
        assert_eq!(words.len(), 9);
    }

    #[test]
    fn test_word_set_empty() {
        let tokenizer = WordTokenizer::new().unwrap();
        assert!(tokenizer.word_set("").is_empty());
        assert!(tokenizer.word_set("123 !!").is_empty());
    }
}
