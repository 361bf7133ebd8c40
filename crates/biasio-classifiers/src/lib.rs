//! Bias In, Bias Out response classifier
//!
//! Classifies a free-text chat message into a coarse hiring-bias topic by
//! keyword matching, detects demographic signals, and composes a paired
//! "biased" and "fair" response.
//!
//! The pipeline for one message:
//! - Normalize (trim, lower-case, collapse whitespace)
//! - Detect region, gender and nationality label
//! - Pick a topic: pay-gap override, then first keyword match in catalog order
//! - Select the region's biased template and inject demographic clauses
//!
//! Everything runs synchronously over immutable tables built at start-up.

pub mod catalog;
pub mod composer;
pub mod gender;
pub mod inject;
pub mod nationality;
pub mod patterns;
pub mod region;
pub mod text;
pub mod topic;

pub use catalog::{BiasedTemplates, FallbackEntry, Topic, TopicCatalog, FALLBACK_TOPIC, PAY_GAP_TOPIC};
pub use composer::{ResponseComposer, Signals};
pub use gender::detect_gender;
pub use inject::{inject_gender, inject_nationality, Framing};
pub use nationality::{detect_nationality, NationalityLabel};
pub use patterns::KeywordMatcher;
pub use region::detect_region;
pub use text::{lower_first, normalize, WordSet, WordTokenizer};
pub use topic::TopicClassifier;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::catalog::TopicCatalog;
    pub use crate::composer::{ResponseComposer, Signals};
    pub use crate::nationality::NationalityLabel;
    pub use biasio_core::{BiasResponse, Gender, Region};
}
