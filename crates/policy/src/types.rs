use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder substituted with a category display name in response templates.
pub const CATEGORY_PLACEHOLDER: &str = "{category}";

/// Placeholder substituted with comma-joined suggestions in the
/// `did_you_mean` template.
pub const SUGGESTIONS_PLACEHOLDER: &str = "{suggestions}";

/// A parsed benefits policy.
///
/// Immutable once loaded. Field names and nesting follow the authored JSON
/// format (`categories`, `not_allowed`, `matching.synonyms`, `responses`,
/// `default_behavior`) so existing policy files load unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PolicyDocument {
    /// Free-form policy version label, reported by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Categories in authored order. Order is the tie-break: first match wins.
    pub categories: Vec<Category>,
    /// Explicitly disallowed items, in authored order.
    pub not_allowed: Vec<DisallowedItem>,
    #[serde(default)]
    pub matching: MatchingSection,
    pub responses: Responses,
    #[serde(default)]
    pub default_behavior: DefaultBehavior,
}

impl PolicyDocument {
    /// Synonyms registered for a category key, in authored order.
    pub fn synonyms_for(&self, key: &str) -> &[String] {
        self.matching.synonyms.get(key)
    }

    /// Categories with `allowed = true`, in authored order.
    pub fn allowed_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.allowed)
    }
}

/// A grouping of benefit types with shared allow/deny rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Stable identifier, also the key into `matching.synonyms`.
    pub key: String,
    /// Display name substituted into response templates.
    pub name: String,
    pub allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Conditions>,
    #[serde(default)]
    pub examples_included: Vec<String>,
    /// Instances that are excluded even though their type is covered
    /// (e.g. "apparel rental" within a gym category).
    #[serde(default)]
    pub examples_excluded: Vec<String>,
}

impl Category {
    pub fn in_person_only(&self) -> bool {
        self.conditions.as_ref().is_some_and(|c| c.in_person_only)
    }
}

/// Boolean condition flags attached to a category.
///
/// Only `in_person_only` is enforced by the matcher. Any other flag is kept in
/// `other` so the document round-trips, and reported by
/// [`Conditions::unenforced`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conditions {
    #[serde(default)]
    pub in_person_only: bool,
    #[serde(flatten)]
    pub other: BTreeMap<String, bool>,
}

impl Conditions {
    /// Flags that are set but have no enforcement rule.
    pub fn unenforced(&self) -> impl Iterator<Item = &str> {
        self.other
            .iter()
            .filter(|(_, set)| **set)
            .map(|(name, _)| name.as_str())
    }
}

/// An item that is never claimable, with the reason shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisallowedItem {
    pub name: String,
    #[serde(default)]
    pub examples: Vec<String>,
    pub reason: String,
}

/// The `matching` section of a policy document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchingSection {
    #[serde(default)]
    pub synonyms: SynonymTable,
    /// Per-policy override of the fuzzy match threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy_threshold: Option<f32>,
    /// Per-policy override of the suggestion threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion_threshold: Option<f32>,
}

/// Lookup from category key to its synonyms.
///
/// Iteration order of the keys is unspecified; the matcher always walks
/// categories in document order and looks synonyms up by key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SynonymTable(HashMap<String, Vec<String>>);

impl SynonymTable {
    pub fn get(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: IntoIterator<Item = S>, S: Into<String>> FromIterator<(K, V)>
    for SynonymTable
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }
}

/// Kinds of response the matcher can produce from a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// Claim approved. Supports `{category}`.
    Approved,
    /// Generic rejection when nothing in the policy applies.
    OutOfScope,
    /// Claim reversed because an in-person-only item was requested online.
    /// Supports `{category}`.
    OnlineOnly,
    /// Near-miss suggestions. Supports `{suggestions}`.
    DidYouMean,
}

impl ResponseKind {
    pub const REQUIRED: [ResponseKind; 3] = [
        ResponseKind::Approved,
        ResponseKind::OutOfScope,
        ResponseKind::OnlineOnly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::Approved => "approved",
            ResponseKind::OutOfScope => "out_of_scope",
            ResponseKind::OnlineOnly => "online_only",
            ResponseKind::DidYouMean => "did_you_mean",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message templates keyed by response kind.
///
/// Stored as a plain string map so documents may carry extra kinds used by
/// other surfaces (greetings, help text) without failing to load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Responses(BTreeMap<String, String>);

impl Responses {
    /// Built-in suggestion template used when a policy does not define one.
    pub const DEFAULT_DID_YOU_MEAN: &'static str = "Did you mean: {suggestions}?";

    pub fn template(&self, kind: ResponseKind) -> Option<&str> {
        self.0.get(kind.as_str()).map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Render the template for `kind`, substituting `{category}`.
    ///
    /// Returns an empty string for an undefined kind; validation guarantees
    /// the required kinds exist.
    pub fn render(&self, kind: ResponseKind, category: Option<&str>) -> String {
        let template = self.template(kind).unwrap_or_default();
        match category {
            Some(name) => template.replace(CATEGORY_PLACEHOLDER, name),
            None => template.to_string(),
        }
    }

    /// Render the suggestion message for an ordered list of candidates.
    pub fn render_suggestions<S: AsRef<str>>(&self, suggestions: &[S]) -> String {
        let joined = suggestions
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", ");
        self.template(ResponseKind::DidYouMean)
            .unwrap_or(Self::DEFAULT_DID_YOU_MEAN)
            .replace(SUGGESTIONS_PLACEHOLDER, &joined)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Responses {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// The `default_behavior` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultBehavior {
    #[serde(default = "DefaultBehavior::default_deny_if_unlisted")]
    pub deny_if_unlisted: bool,
}

impl DefaultBehavior {
    fn default_deny_if_unlisted() -> bool {
        true
    }
}

impl Default for DefaultBehavior {
    fn default() -> Self {
        Self {
            deny_if_unlisted: Self::default_deny_if_unlisted(),
        }
    }
}
