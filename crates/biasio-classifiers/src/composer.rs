//! Response composition: detection, topic lookup and template injection

use crate::catalog::{TopicCatalog, FALLBACK_TOPIC};
use crate::gender::detect_gender;
use crate::inject::{inject_gender, inject_nationality, Framing};
use crate::nationality::{detect_nationality, NationalityLabel};
use crate::region::detect_region;
use crate::text::{normalize, WordTokenizer};
use crate::topic::TopicClassifier;
use biasio_core::{BiasResponse, Gender, Region, Result, UNSPECIFIED};
use tracing::debug;

/// Demographic signals detected in one message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signals {
    pub region: Region,
    pub gender: Option<Gender>,
    pub nationality: Option<NationalityLabel>,
}

/// Builds the biased/fair response pair for a chat message
///
/// Holds only immutable tables, so one instance can serve any number of
/// concurrent requests.
#[derive(Debug)]
pub struct ResponseComposer {
    tokenizer: WordTokenizer,
    classifier: TopicClassifier,
}

impl ResponseComposer {
    /// Create a composer over `catalog`
    pub fn new(catalog: TopicCatalog) -> Result<Self> {
        Ok(Self {
            tokenizer: WordTokenizer::new()?,
            classifier: TopicClassifier::new(catalog)?,
        })
    }

    /// Create a composer over the built-in catalog
    pub fn builtin() -> Result<Self> {
        Self::new(TopicCatalog::builtin()?)
    }

    pub fn catalog(&self) -> &TopicCatalog {
        self.classifier.catalog()
    }

    /// Detect region, gender and nationality in already-normalized text
    pub fn detect(&self, normalized: &str) -> Signals {
        let words = self.tokenizer.word_set(normalized);
        let region = detect_region(&words);
        let gender = detect_gender(normalized, &words);
        let nationality = detect_nationality(normalized, &words, region);

        Signals {
            region,
            gender,
            nationality,
        }
    }

    /// Compose the response for a raw chat message
    pub fn build_response(&self, text: &str) -> BiasResponse {
        let clean = normalize(text);
        let signals = self.detect(&clean);

        let (topic, biased, fair, bias_note) =
            match self.classifier.classify(&clean, signals.gender) {
                Some(topic) => (
                    topic.name.as_str(),
                    topic.biased.for_region(signals.region),
                    topic.fair.as_str(),
                    topic.bias_note.as_str(),
                ),
                None => {
                    let fallback = &self.catalog().fallback;
                    (
                        FALLBACK_TOPIC,
                        fallback.biased.for_region(signals.region),
                        fallback.fair.as_str(),
                        fallback.bias_note.as_str(),
                    )
                }
            };

        debug!(
            topic,
            trigger = self.classifier.trigger(topic, &clean),
            region = %signals.region,
            gender = ?signals.gender,
            nationality = ?signals.nationality,
            "Classified message"
        );

        // Gender first, then nationality
        let biased = inject_gender(biased, signals.gender, Framing::Biased);
        let fair = inject_gender(fair, signals.gender, Framing::Fair);
        let biased = inject_nationality(&biased, signals.nationality, Framing::Biased);
        let fair = inject_nationality(&fair, signals.nationality, Framing::Fair);

        BiasResponse {
            topic: topic.to_string(),
            region: signals.region,
            gender: signals
                .gender
                .map_or(UNSPECIFIED, |g| g.as_str())
                .to_string(),
            nationality: signals
                .nationality
                .map_or(UNSPECIFIED, |n| n.as_str())
                .to_string(),
            biased,
            fair,
            bias_note: bias_note.to_string(),
        }
    }
}
