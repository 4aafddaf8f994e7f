//! YAML configuration file support for claimcheck.
//!
//! One YAML file carries the canonicalization and matcher settings plus the
//! path of the policy document to load, so the CLI and embedding services can
//! share a single runtime config.
//!
//! ## Example YAML configuration
//!
//! ```yaml
//! # claimcheck runtime configuration
//! version: "1.0"
//! name: "wellness benefits"
//! policy_path: "policies/wellness.json"
//!
//! canonical:
//!   version: 1
//!   normalize_unicode: true
//!   lowercase: true
//!   strip_punctuation: false
//!   max_chars: 256
//!
//! matcher:
//!   version: "v1"
//!   match_threshold: 0.7
//!   suggestion_threshold: 0.6
//!   condition_token: "online"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CanonicalizeConfig, MatchConfig};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClaimcheckConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Policy document to load when none is given explicitly
    #[serde(default)]
    pub policy_path: Option<PathBuf>,

    #[serde(default)]
    pub canonical: CanonicalYamlConfig,

    #[serde(default)]
    pub matcher: MatchYamlConfig,
}

impl ClaimcheckConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: ClaimcheckConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.canonical.validate()?;
        // Threshold rules live with MatchConfig; run them on the merged form.
        self.match_config()
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;

        Ok(())
    }

    /// Canonicalization settings as the `canonical` crate expects them.
    pub fn canonical_config(&self) -> CanonicalizeConfig {
        CanonicalizeConfig {
            version: self.canonical.version,
            normalize_unicode: self.canonical.normalize_unicode,
            strip_punctuation: self.canonical.strip_punctuation,
            lowercase: self.canonical.lowercase,
            max_chars: self.canonical.max_chars,
        }
    }

    /// Matcher settings, with the canonical section folded in.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            version: self.matcher.version.clone(),
            match_threshold: self.matcher.match_threshold,
            suggestion_threshold: self.matcher.suggestion_threshold,
            condition_token: self.matcher.condition_token.clone(),
            canonical: self.canonical_config(),
        }
    }
}

impl Default for ClaimcheckConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            policy_path: None,
            canonical: CanonicalYamlConfig::default(),
            matcher: MatchYamlConfig::default(),
        }
    }
}

/// Canonicalization YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "true_value")]
    pub normalize_unicode: bool,

    #[serde(default = "true_value")]
    pub lowercase: bool,

    #[serde(default)]
    pub strip_punctuation: bool,

    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

impl CanonicalYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "canonical.version must be >= 1".to_string(),
            ));
        }
        if self.max_chars == 0 {
            return Err(ConfigLoadError::Validation(
                "canonical.max_chars must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CanonicalYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: true,
            lowercase: true,
            strip_punctuation: false,
            max_chars: default_max_chars(),
        }
    }
}

/// Matcher YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchYamlConfig {
    #[serde(default = "default_match_version")]
    pub version: String,

    #[serde(default = "default_match_threshold")]
    pub match_threshold: f32,

    #[serde(default = "default_suggestion_threshold")]
    pub suggestion_threshold: f32,

    #[serde(default = "default_condition_token")]
    pub condition_token: String,
}

impl Default for MatchYamlConfig {
    fn default() -> Self {
        Self {
            version: default_match_version(),
            match_threshold: default_match_threshold(),
            suggestion_threshold: default_suggestion_threshold(),
            condition_token: default_condition_token(),
        }
    }
}

fn default_version() -> u32 {
    1
}
fn true_value() -> bool {
    true
}
fn default_max_chars() -> usize {
    256
}
fn default_match_version() -> String {
    "v1".to_string()
}
fn default_match_threshold() -> f32 {
    0.7
}
fn default_suggestion_threshold() -> f32 {
    0.6
}
fn default_condition_token() -> String {
    "online".to_string()
}
