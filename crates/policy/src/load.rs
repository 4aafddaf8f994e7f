use std::fs;
use std::path::Path;

use crate::error::PolicyResult;
use crate::types::PolicyDocument;

impl PolicyDocument {
    /// Load and validate a policy document from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> PolicyResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let doc = Self::from_json_slice(&bytes)?;
        tracing::info!(
            path = %path.display(),
            categories = doc.categories.len(),
            not_allowed = doc.not_allowed.len(),
            "policy loaded"
        );
        Ok(doc)
    }

    /// Parse and validate a policy document from a JSON string.
    pub fn from_json_str(json: &str) -> PolicyResult<Self> {
        let doc: PolicyDocument = serde_json::from_str(json)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Parse and validate a policy document from JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> PolicyResult<Self> {
        let doc: PolicyDocument = serde_json::from_slice(bytes)?;
        doc.validate()?;
        Ok(doc)
    }
}
