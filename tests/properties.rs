//! Property-based tests over the full valid metric space using `proptest`.
//! Explores every combination of metric codes for parsing, scoring, and
//! formatting invariants.

use cvss2::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn av_code() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['L', 'A', 'N'])
}

fn ac_code() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['H', 'M', 'L'])
}

fn au_code() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['M', 'S', 'N'])
}

fn impact_code() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['N', 'P', 'C'])
}

fn vector_codes() -> impl Strategy<Value = [char; 6]> {
    (
        av_code(),
        ac_code(),
        au_code(),
        impact_code(),
        impact_code(),
        impact_code(),
    )
        .prop_map(|(av, ac, au, c, i, a)| [av, ac, au, c, i, a])
}

fn vector_string(codes: [char; 6]) -> String {
    format!(
        "AV:{}/AC:{}/Au:{}/C:{}/I:{}/A:{}",
        codes[0], codes[1], codes[2], codes[3], codes[4], codes[5]
    )
}

proptest! {
    #[test]
    fn every_valid_combination_parses(codes in vector_codes()) {
        let input = vector_string(codes);
        prop_assert!(is_valid_vector(&input));
        let vector = BaseVector::parse(&input).unwrap();
        prop_assert_eq!(vector.as_str(), format!("{}{}", DEFAULT_PREFIX, input));
    }

    #[test]
    fn parsing_is_case_insensitive(codes in vector_codes()) {
        let input = vector_string(codes);
        let lower = BaseVector::parse(&input.to_lowercase()).unwrap();
        let upper = BaseVector::parse(&input).unwrap();
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn base_score_is_bounded_and_quantized(codes in vector_codes()) {
        let vector = BaseVector::parse(&vector_string(codes)).unwrap();
        let score = vector.base_score();
        prop_assert!(score >= Decimal::ZERO);
        prop_assert!(score <= Decimal::from(10));
        prop_assert_eq!(score, score.round_dp(1));
    }

    #[test]
    fn base_score_is_deterministic(codes in vector_codes()) {
        let vector = BaseVector::parse(&vector_string(codes)).unwrap();
        prop_assert_eq!(vector.base_score(), vector.base_score());
    }

    #[test]
    fn severity_matches_classifier(codes in vector_codes()) {
        let vector = BaseVector::parse(&vector_string(codes)).unwrap();
        prop_assert_eq!(vector.severity(), nvd_severity(vector.base_score()));
    }

    #[test]
    fn formatting_is_idempotent(codes in vector_codes()) {
        let input = vector_string(codes);
        let once = format_vector(&input, DEFAULT_PREFIX).unwrap();
        let twice = format_vector(&once, DEFAULT_PREFIX).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn from_metrics_matches_parse(codes in vector_codes()) {
        let from_codes = vector_from_metrics(
            &codes[0].to_string(),
            &codes[1].to_string(),
            &codes[2].to_string(),
            &codes[3].to_string(),
            &codes[4].to_string(),
            &codes[5].to_string(),
        )
        .unwrap();
        let parsed = BaseVector::parse(&vector_string(codes)).unwrap();
        prop_assert_eq!(from_codes, parsed);
    }

    #[test]
    fn random_strings_never_panic(input in "\\PC{0,40}") {
        // is_valid_vector never errors regardless of input
        let _ = is_valid_vector(&input);
        let _ = BaseVector::parse(&input);
    }
}
