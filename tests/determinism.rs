use std::sync::Arc;

use claimcheck::{check_item, CanonicalizeConfig, MatchConfig, Matcher, PolicyDocument};

fn bundled_policy() -> PolicyDocument {
    claimcheck::load_policy(concat!(env!("CARGO_MANIFEST_DIR"), "/policies/wellness.json"))
        .expect("bundled policy")
}

#[test]
fn equivalent_spellings_get_identical_verdicts() {
    let policy = bundled_policy();

    // NFKC folds the fullwidth letters; lowercasing and whitespace collapse do the rest.
    let variants = [
        "gym membership",
        "  GYM   membership ",
        "Gym\tMembership",
        "\u{FF27}\u{FF39}\u{FF2D} membership",
    ];
    let first = check_item(variants[0], &policy).expect("first verdict");
    for variant in &variants[1..] {
        let result = check_item(variant, &policy).expect("variant verdict");
        assert_eq!(result, first, "variant {variant:?}");
    }
}

#[test]
fn repeated_evaluation_is_stable() {
    let matcher = Matcher::new(bundled_policy(), MatchConfig::default()).expect("matcher");
    for query in ["psychologist visit", "sports beting", "online", "chair", "monitor"] {
        let a = matcher.match_query(query).expect("first");
        let b = matcher.match_query(query).expect("second");
        assert_eq!(a, b, "{query}");
    }
}

#[test]
fn reloaded_policy_gives_same_results() {
    let a = Matcher::with_defaults(Arc::new(bundled_policy())).expect("matcher a");
    let b = Matcher::with_defaults(Arc::new(bundled_policy())).expect("matcher b");
    for query in ["keyboard tray", "desk lampshade", "lottery ticket"] {
        assert_eq!(
            a.match_query(query).expect("a"),
            b.match_query(query).expect("b"),
            "{query}"
        );
    }
}

#[test]
fn punctuation_stripping_changes_only_configured_queries() {
    let policy = bundled_policy();
    let strip = MatchConfig {
        canonical: CanonicalizeConfig {
            strip_punctuation: true,
            ..CanonicalizeConfig::default()
        },
        ..MatchConfig::default()
    };
    let matcher = Matcher::new(policy, strip).expect("matcher");

    let result = matcher.match_query("gym membership!!!").expect("match");
    assert!(result.is_claimable);
    assert_eq!(result.matched_category.as_deref(), Some("Fitness"));
}
