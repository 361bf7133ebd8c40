//! Core types for Bias In, Bias Out

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder reported when a demographic signal was not detected
pub const UNSPECIFIED: &str = "unspecified";

/// Coarse geographic signal inferred from a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Mentions Pakistani places only
    Pakistan,
    /// Mentions European places only
    Europe,
    /// No regional signal, or a mixed one
    General,
}

impl Region {
    /// Wire name of the region
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pakistan => "pakistan",
            Self::Europe => "europe",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender signal detected in a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Nonbinary,
}

impl Gender {
    /// Wire name of the gender signal
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::Nonbinary => "nonbinary",
        }
    }

    /// Phrase used when addressing the reader ("Because you are a woman, ...")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Female => "a woman",
            Self::Male => "a man",
            Self::Nonbinary => "nonbinary",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paired biased/fair answer to a single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasResponse {
    /// Matched topic name, or `fallback`
    pub topic: String,

    /// Detected region
    pub region: Region,

    /// Detected gender, or `unspecified`
    pub gender: String,

    /// Nationality label, or `unspecified`
    pub nationality: String,

    /// Response framed with the bias pattern
    pub biased: String,

    /// Response framed without it
    pub fair: String,

    /// Why the biased framing is biased
    pub bias_note: String,
}

impl BiasResponse {
    /// Whether no gender signal was found
    pub fn gender_unspecified(&self) -> bool {
        self.gender == UNSPECIFIED
    }

    /// Whether no nationality signal was found
    pub fn nationality_unspecified(&self) -> bool {
        self.nationality == UNSPECIFIED
    }
}
