//! Property tests for detection and injection

use biasio_classifiers::region::{EUROPE_KEYWORDS, PAKISTAN_KEYWORDS};
use biasio_classifiers::{
    detect_gender, detect_region, inject_gender, inject_nationality, normalize, Framing,
    NationalityLabel, ResponseComposer, WordTokenizer,
};
use biasio_core::{Gender, Region};
use proptest::prelude::*;
use proptest::sample::select;

const FILLER: &[&str] = &["hello", "career", "advice", "please", "thanks", "question", "today"];

fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop_oneof![
        Just(Gender::Female),
        Just(Gender::Male),
        Just(Gender::Nonbinary)
    ]
}

fn label_strategy() -> impl Strategy<Value = NationalityLabel> {
    prop_oneof![
        Just(NationalityLabel::Generic),
        select(vec!["Pakistani", "European", "German", "Irish", "Dutch"])
            .prop_map(NationalityLabel::Specific),
    ]
}

fn sentence(words: Vec<&str>) -> String {
    words.join(" ")
}

proptest! {
    #[test]
    fn build_response_is_total(text in "\\PC{0,80}") {
        let composer = ResponseComposer::builtin().unwrap();
        let response = composer.build_response(&text);

        prop_assert!(!response.topic.is_empty());
        prop_assert!(!response.biased.is_empty());
        prop_assert!(!response.fair.is_empty());
        prop_assert!(!response.gender.is_empty());
        prop_assert!(!response.nationality.is_empty());
    }

    #[test]
    fn normalize_is_idempotent(text in "\\PC{0,80}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert!(!once.contains("  "));
        prop_assert_eq!(once.trim(), once.as_str());
    }

    #[test]
    fn pakistan_only_words_yield_pakistan(
        hits in prop::collection::vec(select(PAKISTAN_KEYWORDS.to_vec()), 1..4),
        filler in prop::collection::vec(select(FILLER.to_vec()), 0..6),
    ) {
        let tokenizer = WordTokenizer::new().unwrap();
        let text = sentence([hits, filler].concat());
        prop_assert_eq!(detect_region(&tokenizer.word_set(&text)), Region::Pakistan);
    }

    #[test]
    fn europe_only_words_yield_europe(
        hits in prop::collection::vec(select(EUROPE_KEYWORDS.to_vec()), 1..4),
        filler in prop::collection::vec(select(FILLER.to_vec()), 0..6),
    ) {
        let tokenizer = WordTokenizer::new().unwrap();
        let text = sentence([filler, hits].concat());
        prop_assert_eq!(detect_region(&tokenizer.word_set(&text)), Region::Europe);
    }

    #[test]
    fn mixed_or_absent_regions_yield_general(
        pakistan in select(PAKISTAN_KEYWORDS.to_vec()),
        europe in select(EUROPE_KEYWORDS.to_vec()),
        filler in prop::collection::vec(select(FILLER.to_vec()), 0..6),
    ) {
        let tokenizer = WordTokenizer::new().unwrap();

        let mixed = sentence([vec![pakistan], filler.clone(), vec![europe]].concat());
        prop_assert_eq!(detect_region(&tokenizer.word_set(&mixed)), Region::General);

        let neither = sentence(filler);
        prop_assert_eq!(detect_region(&tokenizer.word_set(&neither)), Region::General);
    }

    #[test]
    fn nonbinary_always_wins(
        before in "[a-z ]{0,30}",
        after in "[a-z ]{0,30}",
        extra in select(vec!["woman", "man", "women", "men", "female", "male"]),
    ) {
        let tokenizer = WordTokenizer::new().unwrap();
        let text = normalize(&format!("{} {} nonbinary {}", before, extra, after));
        let words = tokenizer.word_set(&text);
        prop_assert_eq!(detect_gender(&text, &words), Some(Gender::Nonbinary));
    }

    #[test]
    fn gender_injection_is_idempotent(
        text in "[A-Za-z][a-z ,.]{0,60}",
        gender in gender_strategy(),
        biased in any::<bool>(),
    ) {
        let framing = if biased { Framing::Biased } else { Framing::Fair };
        let once = inject_gender(&text, Some(gender), framing);
        prop_assert_eq!(inject_gender(&once, Some(gender), framing), once);
    }

    #[test]
    fn nationality_injection_is_idempotent(
        text in "[A-Za-z][a-z ,.]{0,60}",
        label in label_strategy(),
        biased in any::<bool>(),
    ) {
        let framing = if biased { Framing::Biased } else { Framing::Fair };
        let once = inject_nationality(&text, Some(label), framing);
        prop_assert_eq!(inject_nationality(&once, Some(label), framing), once);
    }

    #[test]
    fn composed_text_survives_reinjection(text in "[a-zA-Z ,?]{1,80}") {
        let composer = ResponseComposer::builtin().unwrap();
        let response = composer.build_response(&text);
        let signals = composer.detect(&normalize(&text));

        let biased = inject_gender(&response.biased, signals.gender, Framing::Biased);
        let biased = inject_nationality(&biased, signals.nationality, Framing::Biased);
        prop_assert_eq!(biased, response.biased);

        let fair = inject_gender(&response.fair, signals.gender, Framing::Fair);
        let fair = inject_nationality(&fair, signals.nationality, Framing::Fair);
        prop_assert_eq!(fair, response.fair);
    }
}
