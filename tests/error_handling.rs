use std::io::Write;
use std::sync::Arc;

use claimcheck::{
    check_item, check_item_with_config, load_policy, matcher_from_config, CanonicalError,
    ClaimcheckConfig, MatchConfig, MatchError, PipelineError, PolicyDocument, PolicyError,
};
use tempfile::NamedTempFile;

const MINIMAL: &str = r#"{
    "categories": [
        { "key": "fitness", "name": "Fitness", "allowed": true,
          "examples_included": ["gym membership"] }
    ],
    "not_allowed": [],
    "responses": {
        "approved": "Approved — routed under {category}",
        "out_of_scope": "Not covered.",
        "online_only": "In person only."
    }
}"#;

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn blank_query_is_rejected_before_matching() {
    let policy = PolicyDocument::from_json_str(MINIMAL).expect("policy");
    for query in ["", "   ", "\n\t"] {
        let err = check_item(query, &policy).unwrap_err();
        assert!(
            matches!(err, PipelineError::Match(MatchError::EmptyQuery)),
            "{query:?}: {err}"
        );
        assert!(err.is_invalid_input());
    }
}

#[test]
fn overlong_query_is_rejected() {
    let policy = PolicyDocument::from_json_str(MINIMAL).expect("policy");
    let query = "gym ".repeat(100);
    let err = check_item(&query, &policy).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Match(MatchError::QueryTooLong { max: 256, .. })
    ));
}

#[test]
fn malformed_policy_file_is_fatal() {
    let file = temp_file("{ \"categories\": [ }");
    let err = load_policy(file.path()).unwrap_err();
    assert!(matches!(err, PipelineError::Policy(PolicyError::Parse(_))));
    assert!(!err.is_invalid_input());
}

#[test]
fn policy_without_responses_is_fatal() {
    let file = temp_file(r#"{ "categories": [], "not_allowed": [] }"#);
    let err = load_policy(file.path()).unwrap_err();
    match err {
        PipelineError::Policy(PolicyError::Parse(inner)) => {
            assert!(inner.to_string().contains("responses"), "{inner}")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_thresholds_surface_as_config_errors() {
    let policy = Arc::new(PolicyDocument::from_json_str(MINIMAL).expect("policy"));
    let cfg = MatchConfig {
        suggestion_threshold: -0.1,
        ..MatchConfig::default()
    };
    let err = check_item_with_config("gym", policy, cfg).unwrap_err();
    assert!(matches!(err, PipelineError::Match(MatchError::InvalidConfig(_))));
}

#[test]
fn zero_canonical_version_is_rejected() {
    let policy = Arc::new(PolicyDocument::from_json_str(MINIMAL).expect("policy"));
    let mut cfg = MatchConfig::default();
    cfg.canonical.version = 0;
    let err = check_item_with_config("gym", policy, cfg).unwrap_err();
    assert!(matches!(err, PipelineError::Match(MatchError::InvalidConfig(_))));

    // The canonical error itself is reachable through the re-export.
    let bad = claimcheck::CanonicalizeConfig {
        version: 0,
        ..Default::default()
    };
    assert!(matches!(
        claimcheck::canonicalize("gym", &bad),
        Err(CanonicalError::InvalidConfig(_))
    ));
}

#[test]
fn config_file_policy_path_is_used() {
    let policy_file = temp_file(MINIMAL);
    let yaml = format!(
        "version: \"1.0\"\npolicy_path: \"{}\"\n",
        policy_file.path().display()
    );
    let config_file = temp_file(&yaml);

    let config = ClaimcheckConfig::from_file(config_file.path()).expect("config");
    let matcher = matcher_from_config(&config, None).expect("matcher");
    assert!(matcher.match_query("gym").expect("match").is_claimable);
}

#[test]
fn bad_yaml_is_config_error() {
    let config_file = temp_file("version: [unterminated");
    let err: PipelineError = ClaimcheckConfig::from_file(config_file.path())
        .unwrap_err()
        .into();
    assert!(matches!(err, PipelineError::Config(_)));
    assert!(err.to_string().starts_with("configuration failure"));
}
