//! Topic classification

use crate::catalog::{Topic, TopicCatalog, PAY_GAP_TOPIC};
use crate::patterns::KeywordMatcher;
use biasio_core::{Gender, Result};

/// Salary hints that, together with a gender signal, force the pay-gap topic
pub const SALARY_HINTS: &[&str] = &[
    "salary", "pay", "compensation", "wage", "offer", "raise", "negotiation", "bonus",
];

/// First-match keyword classifier over an ordered topic catalog
#[derive(Debug)]
pub struct TopicClassifier {
    catalog: TopicCatalog,
    matchers: Vec<KeywordMatcher>,
    salary_hints: KeywordMatcher,
    pay_gap: Option<usize>,
}

impl TopicClassifier {
    /// Build one matcher per topic
    pub fn new(catalog: TopicCatalog) -> Result<Self> {
        catalog.validate()?;

        let matchers = catalog
            .topics
            .iter()
            .map(|topic| KeywordMatcher::new(topic.name.clone(), topic.keywords.iter().cloned()))
            .collect::<Result<Vec<_>>>()?;
        let salary_hints = KeywordMatcher::new("salary_hints", SALARY_HINTS.iter().copied())?;
        let pay_gap = catalog.topics.iter().position(|t| t.name == PAY_GAP_TOPIC);

        Ok(Self {
            catalog,
            matchers,
            salary_hints,
            pay_gap,
        })
    }

    /// Pick the topic for normalized text, or `None` for the fallback
    pub fn classify(&self, text: &str, gender: Option<Gender>) -> Option<&Topic> {
        if gender.is_some() && self.salary_hints.is_match(text) {
            return self.pay_gap.map(|idx| &self.catalog.topics[idx]);
        }

        self.matchers
            .iter()
            .position(|matcher| matcher.is_match(text))
            .map(|idx| &self.catalog.topics[idx])
    }

    /// Keyword that selected `topic` for `text`, for diagnostics
    pub fn trigger(&self, topic: &str, text: &str) -> Option<&str> {
        self.matchers
            .iter()
            .find(|m| m.name() == topic)
            .and_then(|m| m.first_match(text))
    }

    pub fn catalog(&self) -> &TopicCatalog {
        &self.catalog
    }
}
