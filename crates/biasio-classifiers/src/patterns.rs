//! Keyword phrase matching

use aho_corasick::AhoCorasick;
use biasio_core::{Error, Result};

/// Phrase-containment matcher over a fixed keyword list, using Aho-Corasick
pub struct KeywordMatcher {
    name: String,
    automaton: AhoCorasick,
    keywords: Vec<String>,
}

impl KeywordMatcher {
    /// Create a new matcher
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();

        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&keywords)
            .map_err(|e| {
                Error::classifier(format!("Failed to build keyword matcher '{}': {}", name, e))
            })?;

        Ok(Self {
            name,
            automaton,
            keywords,
        })
    }

    /// Whether any keyword occurs anywhere in `text`
    pub fn is_match(&self, text: &str) -> bool {
        !self.keywords.is_empty() && self.automaton.is_match(text)
    }

    /// First keyword found in `text`
    pub fn first_match(&self, text: &str) -> Option<&str> {
        if self.keywords.is_empty() {
            return None;
        }
        self.automaton
            .find(text)
            .map(|m| self.keywords[m.pattern().as_usize()].as_str())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl std::fmt::Debug for KeywordMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordMatcher")
            .field("name", &self.name)
            .field("keywords", &self.keywords.len())
            .finish()
    }
}
