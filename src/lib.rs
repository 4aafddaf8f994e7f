//! Workspace umbrella crate for claimcheck.
//!
//! Stitches policy loading, query canonicalization and matching together so
//! callers can ask "is this item claimable?" through a single API entry point.

pub mod config;

pub use canonical::{canonicalize, normalize_term, CanonicalError, CanonicalQuery, CanonicalizeConfig};
pub use matcher::{
    edit_distance, evaluate, phrase_matches, set_match_metrics, similar, similarity, MatchConfig,
    MatchError, MatchMetrics, MatchOutcome, MatchResult, Matcher,
};
pub use policy::{
    Category, Conditions, DefaultBehavior, DisallowedItem, MatchingSection, PolicyDocument,
    PolicyError, ResponseKind, Responses, SynonymTable,
};

pub use crate::config::{ClaimcheckConfig, ConfigLoadError};

use std::error::Error;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Errors that can occur while checking an item against a policy.
#[derive(Debug)]
pub enum PipelineError {
    Policy(PolicyError),
    Canonical(CanonicalError),
    Match(MatchError),
    Config(ConfigLoadError),
    /// No policy path was given and the config does not name one.
    MissingPolicyPath,
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Policy(err) => write!(f, "policy failure: {err}"),
            PipelineError::Canonical(err) => write!(f, "canonicalization failure: {err}"),
            PipelineError::Match(err) => write!(f, "matching failure: {err}"),
            PipelineError::Config(err) => write!(f, "configuration failure: {err}"),
            PipelineError::MissingPolicyPath => write!(f, "no policy document path configured"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Policy(err) => Some(err),
            PipelineError::Canonical(err) => Some(err),
            PipelineError::Match(err) => Some(err),
            PipelineError::Config(err) => Some(err),
            PipelineError::MissingPolicyPath => None,
        }
    }
}

impl From<PolicyError> for PipelineError {
    fn from(value: PolicyError) -> Self {
        PipelineError::Policy(value)
    }
}

impl From<CanonicalError> for PipelineError {
    fn from(value: CanonicalError) -> Self {
        PipelineError::Canonical(value)
    }
}

impl From<MatchError> for PipelineError {
    fn from(value: MatchError) -> Self {
        PipelineError::Match(value)
    }
}

impl From<ConfigLoadError> for PipelineError {
    fn from(value: ConfigLoadError) -> Self {
        PipelineError::Config(value)
    }
}

impl PipelineError {
    /// True when the caller's query, not the deployment, caused the failure.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            PipelineError::Match(err) => err.is_invalid_input(),
            PipelineError::Canonical(CanonicalError::EmptyInput)
            | PipelineError::Canonical(CanonicalError::TooLong { .. }) => true,
            _ => false,
        }
    }
}

/// Load and validate a policy document from a JSON file.
pub fn load_policy<P: AsRef<Path>>(path: P) -> Result<PolicyDocument, PipelineError> {
    Ok(PolicyDocument::from_path(path)?)
}

/// Build a matcher from a runtime config, loading the policy it names.
///
/// `policy_path` takes precedence over `cfg.policy_path`.
pub fn matcher_from_config(
    cfg: &ClaimcheckConfig,
    policy_path: Option<&Path>,
) -> Result<Matcher, PipelineError> {
    let path = policy_path
        .or(cfg.policy_path.as_deref())
        .ok_or(PipelineError::MissingPolicyPath)?;
    let policy = load_policy(path)?;
    let matcher = Matcher::new(policy, cfg.match_config())?;
    tracing::debug!(
        policy = %path.display(),
        match_threshold = matcher.config().match_threshold,
        suggestion_threshold = matcher.config().suggestion_threshold,
        "matcher ready"
    );
    Ok(matcher)
}

/// Check one item query against `policy` with default settings.
pub fn check_item(query: &str, policy: &PolicyDocument) -> Result<MatchResult, PipelineError> {
    Ok(evaluate(query, policy)?)
}

/// Check one item query with explicit matcher configuration.
pub fn check_item_with_config(
    query: &str,
    policy: Arc<PolicyDocument>,
    cfg: MatchConfig,
) -> Result<MatchResult, PipelineError> {
    let matcher = Matcher::new(policy, cfg)?;
    Ok(matcher.match_query(query)?)
}
