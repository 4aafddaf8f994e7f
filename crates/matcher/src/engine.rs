use std::sync::Arc;
use std::time::Instant;

use canonical::{canonicalize, normalize_term, CanonicalQuery, CanonicalizeConfig};
use policy::{PolicyDocument, ResponseKind};

use crate::metrics::metrics_recorder;
use crate::similarity::phrase_matches;
use crate::suggest::{self, Term};
use crate::types::{MatchConfig, MatchError, MatchOutcome, MatchResult};


/// Policy phrases for one allowed category, pre-normalized once at build time.
#[derive(Debug, Clone)]
struct PreparedCategory {
    name: String,
    in_person_only: bool,
    included: Vec<Term>,
    synonyms: Vec<Term>,
    excluded: Vec<Term>,
}

#[derive(Debug, Clone)]
struct PreparedDisallowed {
    reason: String,
    name: String,
    examples: Vec<Term>,
}

/// Evaluates item queries against one immutable policy document.
///
/// Building a `Matcher` validates the configuration and normalizes every policy
/// phrase once. Evaluation itself is pure and lock-free, so one instance can be
/// shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Matcher {
    policy: Arc<PolicyDocument>,
    cfg: MatchConfig,
    match_threshold: f32,
    suggestion_threshold: f32,
    condition_word: String,
    categories: Vec<PreparedCategory>,
    disallowed: Vec<PreparedDisallowed>,
}

impl Matcher {
    /// Build a matcher over `policy`.
    ///
    /// Thresholds declared in the policy's `matching` section override the
    /// ones in `cfg`. When the policy sets only one of them, the inherited one
    /// is moved just far enough to keep `suggestion <= match`.
    pub fn new(policy: impl Into<Arc<PolicyDocument>>, cfg: MatchConfig) -> Result<Self, MatchError> {
        let policy = policy.into();
        let (match_threshold, suggestion_threshold) = match (
            policy.matching.fuzzy_threshold,
            policy.matching.suggestion_threshold,
        ) {
            (Some(m), Some(s)) => (m, s),
            (Some(m), None) => (m, cfg.suggestion_threshold.min(m)),
            (None, Some(s)) => (cfg.match_threshold.max(s), s),
            (None, None) => (cfg.match_threshold, cfg.suggestion_threshold),
        };
        let effective = MatchConfig {
            match_threshold,
            suggestion_threshold,
            ..cfg
        };
        effective.validate()?;

        let canon = &effective.canonical;
        let condition_word = normalize_term(&effective.condition_token, canon);
        if condition_word.is_empty() {
            return Err(MatchError::InvalidConfig(
                "condition_token normalizes to an empty string".into(),
            ));
        }

        let categories = policy
            .allowed_categories()
            .map(|category| PreparedCategory {
                name: category.name.clone(),
                in_person_only: category.in_person_only(),
                included: prepare(&category.examples_included, canon),
                synonyms: prepare(policy.synonyms_for(&category.key), canon),
                excluded: prepare(&category.examples_excluded, canon),
            })
            .collect();

        let disallowed = policy
            .not_allowed
            .iter()
            .map(|item| PreparedDisallowed {
                reason: item.reason.clone(),
                name: item.name.clone(),
                examples: prepare(&item.examples, canon),
            })
            .collect();

        Ok(Self {
            match_threshold: effective.match_threshold,
            suggestion_threshold: effective.suggestion_threshold,
            cfg: effective,
            condition_word,
            categories,
            disallowed,
            policy,
        })
    }

    /// Build a matcher with [`MatchConfig::default`].
    pub fn with_defaults(policy: impl Into<Arc<PolicyDocument>>) -> Result<Self, MatchError> {
        Self::new(policy, MatchConfig::default())
    }

    pub fn policy(&self) -> &PolicyDocument {
        &self.policy
    }

    /// Shared handle to the policy, for callers that outlive the matcher.
    pub fn policy_arc(&self) -> Arc<PolicyDocument> {
        Arc::clone(&self.policy)
    }

    /// Effective configuration, with policy overrides applied.
    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Decide whether `query` is claimable under the policy.
    ///
    /// Fails only for queries that are empty after normalization or longer
    /// than the configured limit.
    pub fn match_query(&self, query: &str) -> Result<MatchResult, MatchError> {
        let start = Instant::now();
        let canonical = canonicalize(query, &self.cfg.canonical)?;
        let result = self.evaluate_canonical(&canonical);

        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(&result.outcome, start.elapsed(), result.suggestions.len());
        }
        tracing::debug!(
            query = canonical.as_str(),
            outcome = result.outcome.label(),
            claimable = result.is_claimable,
            category = result.matched_category.as_deref(),
            suggestions = result.suggestions.len(),
            "query evaluated"
        );
        Ok(result)
    }

    fn evaluate_canonical(&self, query: &CanonicalQuery) -> MatchResult {
        let text = query.as_str();
        let responses = &self.policy.responses;

        // Category scan: first confirmed match wins, reversed or not.
        let mut excluded = None;
        for category in &self.categories {
            let Some(term) = self
                .first_match(text, &category.included)
                .or_else(|| self.first_match(text, &category.synonyms))
            else {
                continue;
            };

            if let Some(hit) = self.first_match(text, &category.excluded) {
                excluded = Some(MatchOutcome::Excluded {
                    category: category.name.clone(),
                    excluded_term: hit.display.clone(),
                });
                break;
            }

            if category.in_person_only && query.has_word(&self.condition_word) {
                return MatchResult {
                    is_claimable: false,
                    message: responses.render(ResponseKind::OnlineOnly, Some(&category.name)),
                    matched_category: Some(category.name.clone()),
                    suggestions: Vec::new(),
                    outcome: MatchOutcome::ConditionNotMet {
                        category: category.name.clone(),
                        condition: "in_person_only".to_string(),
                    },
                };
            }

            return MatchResult {
                is_claimable: true,
                message: responses.render(ResponseKind::Approved, Some(&category.name)),
                matched_category: Some(category.name.clone()),
                suggestions: Vec::new(),
                outcome: MatchOutcome::Approved {
                    category: category.name.clone(),
                    matched_term: term.display.clone(),
                },
            };
        }

        for item in &self.disallowed {
            if let Some(term) = self.first_match(text, &item.examples) {
                return MatchResult {
                    is_claimable: false,
                    message: item.reason.clone(),
                    matched_category: None,
                    suggestions: Vec::new(),
                    outcome: MatchOutcome::Disallowed {
                        item: item.name.clone(),
                        matched_term: term.display.clone(),
                    },
                };
            }
        }

        let suggestions = suggest::collect(
            text,
            self.categories
                .iter()
                .flat_map(|c| c.included.iter().chain(c.synonyms.iter())),
            self.suggestion_threshold,
        );
        if !suggestions.is_empty() {
            return MatchResult {
                is_claimable: false,
                message: responses.render_suggestions(&suggestions),
                matched_category: None,
                suggestions,
                outcome: MatchOutcome::Suggested,
            };
        }

        // deny_if_unlisted is carried but an unmatched query is always denied.
        MatchResult {
            is_claimable: false,
            message: responses.render(ResponseKind::OutOfScope, None),
            matched_category: None,
            suggestions: Vec::new(),
            outcome: excluded.unwrap_or(MatchOutcome::OutOfScope),
        }
    }

    fn first_match<'t>(&self, query: &str, terms: &'t [Term]) -> Option<&'t Term> {
        terms
            .iter()
            .find(|term| phrase_matches(query, &term.normalized, self.match_threshold))
    }
}

/// Evaluate `query` against `policy` with the default configuration.
///
/// Clones `policy` and normalizes every phrase in it on each call. For more
/// than one query, build a [`Matcher`] once and call
/// [`Matcher::match_query`].
pub fn evaluate(query: &str, policy: &PolicyDocument) -> Result<MatchResult, MatchError> {
    Matcher::with_defaults(policy.clone())?.match_query(query)
}

fn prepare(phrases: &[String], cfg: &CanonicalizeConfig) -> Vec<Term> {
    phrases
        .iter()
        .filter_map(|phrase| {
            let normalized = normalize_term(phrase, cfg);
            (!normalized.is_empty()).then(|| Term {
                display: phrase.clone(),
                normalized,
            })
        })
        .collect()
}
