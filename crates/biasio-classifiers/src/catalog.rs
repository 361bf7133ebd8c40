//! Topic catalog: keyword triggers and response templates

use biasio_core::{Error, Region, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Topic name reported when no topic matches
pub const FALLBACK_TOPIC: &str = "fallback";

/// Topic forced when a gender signal meets a salary hint
pub const PAY_GAP_TOPIC: &str = "pay_gap";

const DEFAULT_CATALOG: &str = include_str!("../catalog/default.yaml");

/// Ordered set of topics plus the fallback entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicCatalog {
    /// Topics in match priority order
    pub topics: Vec<Topic>,

    /// Entry used when no topic matches
    pub fallback: FallbackEntry,
}

/// A category of hiring-bias discussion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    /// Unique topic name
    pub name: String,

    /// Trigger phrases, matched by containment
    pub keywords: Vec<String>,

    /// Biased framing per region
    pub biased: BiasedTemplates,

    /// Fair framing
    pub fair: String,

    /// Why the biased framing is biased
    #[serde(default)]
    pub bias_note: String,
}

/// Default entry used when no topic matches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackEntry {
    pub biased: BiasedTemplates,
    pub fair: String,
    #[serde(default)]
    pub bias_note: String,
}

/// Biased templates keyed by region; `general` is mandatory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasedTemplates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pakistan: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub europe: Option<String>,

    pub general: String,
}

impl BiasedTemplates {
    /// Template for `region`, falling back to the general one
    pub fn for_region(&self, region: Region) -> &str {
        let regional = match region {
            Region::Pakistan => self.pakistan.as_deref(),
            Region::Europe => self.europe.as_deref(),
            Region::General => None,
        };
        regional.unwrap_or(&self.general)
    }
}

impl TopicCatalog {
    /// The catalog shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(DEFAULT_CATALOG)
    }

    /// Parse and validate a catalog from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let catalog: Self = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Serialize back to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check structural rules the classifier relies on
    pub fn validate(&self) -> Result<()> {
        if self.topics.is_empty() {
            return Err(Error::config("catalog defines no topics"));
        }

        let mut seen = HashSet::new();
        for topic in &self.topics {
            if topic.name.trim().is_empty() {
                return Err(Error::config("topic with empty name"));
            }
            if topic.name == FALLBACK_TOPIC {
                return Err(Error::config(format!(
                    "topic name '{}' is reserved",
                    FALLBACK_TOPIC
                )));
            }
            if !seen.insert(topic.name.as_str()) {
                return Err(Error::config(format!("duplicate topic '{}'", topic.name)));
            }
            if topic.keywords.is_empty() {
                return Err(Error::config(format!(
                    "topic '{}' has no keywords",
                    topic.name
                )));
            }
            // An empty phrase is contained in every message
            if topic.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(Error::config(format!(
                    "topic '{}' has an empty keyword",
                    topic.name
                )));
            }
        }

        Ok(())
    }

    /// Look up a topic by name
    pub fn get(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
