//! Error types produced while loading a policy document.
//!
//! Every variant is a configuration defect: the document is rejected as a
//! whole and no partial evaluation is attempted. Callers surface these as-is
//! (the server refuses to start, the CLI exits non-zero).
//!
//! ```rust
//! use policy::{PolicyDocument, PolicyError};
//!
//! // `categories` is missing entirely.
//! let err = PolicyDocument::from_json_str(r#"{ "not_allowed": [], "responses": {} }"#)
//!     .unwrap_err();
//! assert!(matches!(err, PolicyError::Parse(_)));
//! assert!(err.to_string().contains("categories"));
//! ```
use thiserror::Error;

/// Errors that can occur when loading or validating a policy document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PolicyError {
    /// The policy file could not be read.
    #[error("failed to read policy file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not fit the schema. Missing
    /// required top-level keys land here.
    #[error("failed to parse policy document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required response template is not defined.
    #[error("policy responses must define `{0}`")]
    MissingResponse(&'static str),

    /// The document parsed but breaks a structural rule.
    #[error("invalid policy document: {0}")]
    Invalid(String),
}

impl PolicyError {
    /// Suggested HTTP status for surfaces that expose policy uploads.
    pub fn http_status_code(&self) -> u16 {
        match self {
            PolicyError::Io(_) => 500,
            _ => 422,
        }
    }
}

pub type PolicyResult<T> = Result<T, PolicyError>;
