use canonical::{CanonicalError, CanonicalizeConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tuning knobs for a [`Matcher`](crate::Matcher).
///
/// Cheap to clone and serde-friendly so it can be embedded in the YAML runtime
/// config. Thresholds set in a policy's `matching` section take precedence
/// over the values here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Configuration schema version.
    #[serde(default = "MatchConfig::default_version")]
    pub version: String,
    /// Similarity a phrase must exceed to count as a match.
    #[serde(default = "MatchConfig::default_match_threshold")]
    pub match_threshold: f32,
    /// Looser similarity used to surface did-you-mean candidates.
    #[serde(default = "MatchConfig::default_suggestion_threshold")]
    pub suggestion_threshold: f32,
    /// Word that marks a query as online for `in_person_only` categories.
    #[serde(default = "MatchConfig::default_condition_token")]
    pub condition_token: String,
    /// Canonicalization applied to queries and policy phrases alike.
    #[serde(default)]
    pub canonical: CanonicalizeConfig,
}

impl MatchConfig {
    pub(crate) fn default_version() -> String {
        "v1".to_string()
    }

    pub(crate) fn default_match_threshold() -> f32 {
        0.7
    }

    pub(crate) fn default_suggestion_threshold() -> f32 {
        0.6
    }

    pub(crate) fn default_condition_token() -> String {
        "online".to_string()
    }

    /// Validate the configuration before building a matcher.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version.trim().is_empty() {
            return Err(MatchError::InvalidConfig(
                "config.version must not be empty".into(),
            ));
        }
        for (name, value) in [
            ("match_threshold", self.match_threshold),
            ("suggestion_threshold", self.suggestion_threshold),
        ] {
            if !(0.0..1.0).contains(&value) {
                return Err(MatchError::InvalidConfig(format!(
                    "{name} must be in [0.0, 1.0), got {value}"
                )));
            }
        }
        if self.suggestion_threshold > self.match_threshold {
            return Err(MatchError::InvalidConfig(
                "suggestion_threshold must not exceed match_threshold".into(),
            ));
        }
        if self.condition_token.trim().is_empty() {
            return Err(MatchError::InvalidConfig(
                "condition_token must not be empty".into(),
            ));
        }
        self.canonical
            .validate()
            .map_err(|e| MatchError::InvalidConfig(e.to_string()))
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            match_threshold: Self::default_match_threshold(),
            suggestion_threshold: Self::default_suggestion_threshold(),
            condition_token: Self::default_condition_token(),
            canonical: CanonicalizeConfig::default(),
        }
    }
}

/// Which decision step produced a verdict.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Matched an included example or synonym of an allowed category.
    Approved {
        category: String,
        matched_term: String,
    },
    /// Matched a category, then hit one of its excluded examples.
    Excluded {
        category: String,
        excluded_term: String,
    },
    /// Matched an example of an explicitly disallowed item.
    Disallowed { item: String, matched_term: String },
    /// Matched a category whose condition the query fails.
    ConditionNotMet { category: String, condition: String },
    /// Nothing matched, but near-miss candidates were found.
    Suggested,
    /// Nothing in the policy applies.
    OutOfScope,
}

impl MatchOutcome {
    /// Short label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            MatchOutcome::Approved { .. } => "approved",
            MatchOutcome::Excluded { .. } => "excluded",
            MatchOutcome::Disallowed { .. } => "disallowed",
            MatchOutcome::ConditionNotMet { .. } => "condition_not_met",
            MatchOutcome::Suggested => "suggested",
            MatchOutcome::OutOfScope => "out_of_scope",
        }
    }
}

/// Verdict for a single item query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub is_claimable: bool,
    /// Human-readable reason, rendered from the policy's templates.
    pub message: String,
    /// Display name of the category the verdict was routed under. Cleared when
    /// an excluded example reversed the match.
    pub matched_category: Option<String>,
    /// Did-you-mean candidates in first-encounter order, deduplicated.
    pub suggestions: Vec<String>,
    pub outcome: MatchOutcome,
}

/// Errors produced by the matching layer.
///
/// A well-formed policy and a non-empty query never fail; "not claimable" is
/// a normal [`MatchResult`], not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Invalid matcher configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// The query was empty after trimming and normalization.
    #[error("query must not be empty")]
    EmptyQuery,
    /// The query exceeds the configured length limit.
    #[error("query has {len} chars, limit is {max}")]
    QueryTooLong { len: usize, max: usize },
}

impl From<CanonicalError> for MatchError {
    fn from(err: CanonicalError) -> Self {
        match err {
            CanonicalError::EmptyInput => MatchError::EmptyQuery,
            CanonicalError::TooLong { len, max } => MatchError::QueryTooLong { len, max },
            CanonicalError::InvalidConfig(msg) => MatchError::InvalidConfig(msg),
        }
    }
}

impl MatchError {
    /// True for errors caused by the caller's query rather than configuration.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, MatchError::EmptyQuery | MatchError::QueryTooLong { .. })
    }
}
