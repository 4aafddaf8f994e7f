//! Query canonicalization for claimcheck.
//!
//! Turns a free-text item query ("  Gym MEMBERSHIP ") into the canonical form
//! the policy matcher compares against ("gym membership"), and normalizes
//! policy phrases the same way so both sides of a comparison agree.
//!
//! ## What we do
//!
//! - Unicode normalization (NFKC by default)
//! - Locale-free lowercasing
//! - Optional punctuation stripping
//! - Whitespace collapsing and trimming
//! - UAX #29 word tests (`has_word`)
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock, no locale. Same text and config give the same
//! [`CanonicalQuery`] on any machine.

mod config;
mod error;
mod pipeline;
mod query;

pub use crate::config::CanonicalizeConfig;
pub use crate::error::CanonicalError;
pub use crate::pipeline::{canonicalize, normalize_term};
pub use crate::query::CanonicalQuery;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_canonicalize_default() {
        let cfg = CanonicalizeConfig::default();
        let out = canonicalize("  Yoga\nMAT   Deluxe ", &cfg).expect("canonicalization succeeds");

        assert_eq!(out.text, "yoga mat deluxe");
        assert_eq!(out.canonical_version, cfg.version);
        assert_eq!(out.words().collect::<Vec<_>>(), vec!["yoga", "mat", "deluxe"]);
    }

    #[test]
    fn strip_punctuation_splits_hyphenated_items() {
        let cfg = CanonicalizeConfig {
            strip_punctuation: true,
            ..Default::default()
        };
        let out = canonicalize("T-Shirt, (Running)!", &cfg).expect("canonicalization succeeds");
        assert_eq!(out.text, "t shirt running");
    }

    #[test]
    fn punctuation_kept_by_default() {
        let out = canonicalize("T-Shirt", &CanonicalizeConfig::default()).expect("query");
        assert_eq!(out.text, "t-shirt");
    }

    #[test]
    fn unicode_equivalence_nfkc() {
        let cfg = CanonicalizeConfig::default();
        let composed = canonicalize("Caf\u{00E9} voucher", &cfg).expect("composed");
        let decomposed = canonicalize("Cafe\u{0301} voucher", &cfg).expect("decomposed");
        assert_eq!(composed.text, decomposed.text);
    }

    #[test]
    fn fullwidth_folds_to_ascii() {
        let cfg = CanonicalizeConfig::default();
        let out = canonicalize("\u{FF27}\u{FF39}\u{FF2D}", &cfg).expect("fullwidth");
        assert_eq!(out.text, "gym");
    }

    #[test]
    fn disable_unicode_normalization() {
        let cfg = CanonicalizeConfig {
            normalize_unicode: false,
            ..Default::default()
        };
        let out = canonicalize("Cafe\u{0301}", &cfg).expect("canonicalization succeeds");
        assert_eq!(out.text, "cafe\u{0301}");
    }

    #[test]
    fn empty_input_rejected() {
        let cfg = CanonicalizeConfig::default();
        assert!(matches!(
            canonicalize("  \t\n ", &cfg),
            Err(CanonicalError::EmptyInput)
        ));
        assert!(matches!(canonicalize("", &cfg), Err(CanonicalError::EmptyInput)));
    }

    #[test]
    fn overlong_query_rejected() {
        let cfg = CanonicalizeConfig {
            max_chars: 8,
            ..Default::default()
        };
        assert!(canonicalize("yoga mat", &cfg).is_ok());
        assert!(matches!(
            canonicalize("yoga mats", &cfg),
            Err(CanonicalError::TooLong { len: 9, max: 8 })
        ));
    }

    #[test]
    fn invalid_config_version_rejected() {
        let cfg = CanonicalizeConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            canonicalize("content", &cfg),
            Err(CanonicalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn term_and_query_agree() {
        let cfg = CanonicalizeConfig::default();
        let phrase = "  Noise-Cancelling   HEADPHONES";
        let query = canonicalize(phrase, &cfg).expect("query");
        assert_eq!(query.text, normalize_term(phrase, &cfg));
    }
}
