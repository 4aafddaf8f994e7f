use std::io::Write;
use std::path::PathBuf;

use policy::{PolicyDocument, PolicyError, ResponseKind};
use tempfile::NamedTempFile;

fn sample_policy_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../policies/wellness.json")
}

#[test]
fn bundled_policy_loads() {
    let doc = PolicyDocument::from_path(sample_policy_path()).expect("bundled policy is valid");

    let keys: Vec<&str> = doc.categories.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["fitness", "mental_health", "home_office", "cosmetic"]);
    assert_eq!(doc.version.as_deref(), Some("2026.1"));
    assert_eq!(doc.not_allowed[0].reason, "Gambling-related items are not covered.");
    assert!(doc.responses.template(ResponseKind::DidYouMean).is_some());

    let fitness = doc
        .categories
        .iter()
        .find(|c| c.key == "fitness")
        .expect("fitness category");
    assert!(fitness.in_person_only());
    let unenforced: Vec<&str> = fitness
        .conditions
        .as_ref()
        .map(|c| c.unenforced().collect())
        .unwrap_or_default();
    assert_eq!(unenforced, vec!["exclude_wearable_tech"]);
}

#[test]
fn load_from_temp_file() {
    let json = r#"{
        "categories": [],
        "not_allowed": [],
        "responses": { "approved": "ok", "out_of_scope": "no", "online_only": "in person" }
    }"#;
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write");

    let doc = PolicyDocument::from_path(file.path()).expect("load");
    assert!(doc.categories.is_empty());
}

#[test]
fn missing_file_is_io_error() {
    let err = PolicyDocument::from_path("/nonexistent/claimcheck/policy.json").unwrap_err();
    assert!(matches!(err, PolicyError::Io(_)));
    assert_eq!(err.http_status_code(), 500);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = PolicyDocument::from_json_slice(b"{ \"categories\": [").unwrap_err();
    assert!(matches!(err, PolicyError::Parse(_)));
    assert_eq!(err.http_status_code(), 422);
}

#[test]
fn document_round_trips_through_serde() {
    let doc = PolicyDocument::from_path(sample_policy_path()).expect("load");
    let json = serde_json::to_string(&doc).expect("serialize");
    let again = PolicyDocument::from_json_str(&json).expect("reload");
    assert_eq!(doc, again);
}
