use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use claimcheck::MatchResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Claimability check request
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    /// Free-text item description, e.g. "yoga mat"
    #[serde(default)]
    pub query: String,
}

/// Claimability check response
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CheckResponse {
    pub is_claimable: bool,
    pub message: String,
    pub matched_category: Option<String>,
    pub suggestions: Vec<String>,
    /// Decision step that produced the verdict (approved, disallowed, ...)
    pub outcome: String,
}

impl From<MatchResult> for CheckResponse {
    fn from(result: MatchResult) -> Self {
        Self {
            outcome: result.outcome.label().to_string(),
            is_claimable: result.is_claimable,
            message: result.message,
            matched_category: result.matched_category,
            suggestions: result.suggestions,
        }
    }
}

/// Check whether one item is claimable under the loaded policy.
///
/// Blank or missing `query` is rejected with 400 before matching.
pub async fn check_item(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let Json(request) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;

    let result = state.matcher.match_query(&request.query)?;

    tracing::info!(
        outcome = result.outcome.label(),
        claimable = result.is_claimable,
        "claim checked"
    );

    Ok(Json(CheckResponse::from(result)))
}

/// Category summary in the policy overview
#[derive(Debug, Serialize, Deserialize)]
pub struct CategorySummary {
    pub key: String,
    pub name: String,
    pub allowed: bool,
    pub in_person_only: bool,
    pub included_examples: usize,
    pub synonyms: usize,
}

/// Overview of the loaded policy
#[derive(Debug, Serialize, Deserialize)]
pub struct PolicySummary {
    pub version: Option<String>,
    pub categories: Vec<CategorySummary>,
    pub not_allowed: Vec<String>,
    pub match_threshold: f32,
    pub suggestion_threshold: f32,
    pub deny_if_unlisted: bool,
}

/// Summarize the loaded policy: categories, disallowed items, thresholds.
pub async fn policy_summary(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    let policy = state.policy();
    let cfg = state.matcher.config();

    let categories = policy
        .categories
        .iter()
        .map(|c| CategorySummary {
            key: c.key.clone(),
            name: c.name.clone(),
            allowed: c.allowed,
            in_person_only: c.in_person_only(),
            included_examples: c.examples_included.len(),
            synonyms: policy.synonyms_for(&c.key).len(),
        })
        .collect();

    Ok(Json(PolicySummary {
        version: policy.version.clone(),
        categories,
        not_allowed: policy.not_allowed.iter().map(|d| d.name.clone()).collect(),
        match_threshold: cfg.match_threshold,
        suggestion_threshold: cfg.suggestion_threshold,
        deny_if_unlisted: policy.default_behavior.deny_if_unlisted,
    }))
}
