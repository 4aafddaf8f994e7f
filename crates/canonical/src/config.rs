//! Configuration types for query canonicalization.
//!
//! [`CanonicalizeConfig`] controls how a free-text item query is normalized
//! before it reaches the policy matcher. The same config must be used for every
//! query evaluated against a policy, otherwise verdicts stop being reproducible.
//!
//! # Examples
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.normalize_unicode);
//! assert!(!config.strip_punctuation);
//! assert!(config.lowercase);
//! assert_eq!(config.max_chars, 256);
//! ```
//!
//! Stripping punctuation turns "t-shirt" into "t shirt", which changes how
//! substring rules see the query. It is off by default.
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig {
//!     strip_punctuation: true,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the query canonicalization pipeline.
///
/// Cheap to clone and serde-friendly so it can be embedded in the YAML
/// runtime config or the matcher config.
///
/// ```json
/// {
///   "version": 1,
///   "normalize_unicode": true,
///   "strip_punctuation": false,
///   "lowercase": true,
///   "max_chars": 256
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalizeConfig {
    /// Version of the canonicalization behavior. Must be >= 1; version 0 is
    /// reserved and rejected with [`CanonicalError::InvalidConfig`].
    #[serde(default = "CanonicalizeConfig::default_version")]
    pub version: u32,

    /// Apply Unicode NFKC normalization before other transforms, so that
    /// "Café" typed with a combining accent matches the precomposed form.
    #[serde(default = "CanonicalizeConfig::default_true")]
    pub normalize_unicode: bool,

    /// Treat Unicode punctuation as a delimiter and drop it.
    #[serde(default)]
    pub strip_punctuation: bool,

    /// Apply locale-free Unicode lowercasing. Policy matching is
    /// case-insensitive, so turning this off is only useful in tests.
    #[serde(default = "CanonicalizeConfig::default_true")]
    pub lowercase: bool,

    /// Upper bound on the canonical query length, in chars. Edit distance is
    /// quadratic in the query length, so this keeps a single evaluation small.
    #[serde(default = "CanonicalizeConfig::default_max_chars")]
    pub max_chars: usize,
}

impl CanonicalizeConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_true() -> bool {
        true
    }

    pub(crate) fn default_max_chars() -> usize {
        256
    }

    /// Validate the configuration before first use.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.max_chars == 0 {
            return Err(CanonicalError::InvalidConfig(
                "max_chars must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CanonicalizeConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            normalize_unicode: true,
            strip_punctuation: false,
            lowercase: true,
            max_chars: Self::default_max_chars(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let cfg: CanonicalizeConfig =
            serde_json::from_str(r#"{ "strip_punctuation": true }"#).expect("parse");
        assert!(cfg.strip_punctuation);
        assert!(cfg.lowercase);
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.max_chars, 256);
    }

    #[test]
    fn zero_max_chars_rejected() {
        let cfg = CanonicalizeConfig {
            max_chars: 0,
            ..Default::default()
        };
        match cfg.validate() {
            Err(CanonicalError::InvalidConfig(msg)) => assert!(msg.contains("max_chars")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
