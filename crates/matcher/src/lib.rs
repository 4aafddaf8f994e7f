//! # Policy matching engine (`matcher`)
//!
//! Decides whether a free-text item query is claimable under a
//! [`PolicyDocument`](policy::PolicyDocument), and explains why.
//!
//! Evaluation is an ordered, first-applicable-wins scan:
//!
//! 1. Allowed categories in document order: included examples, then the
//!    category's synonyms. A hit is re-checked against the category's excluded
//!    examples, which reverse it.
//! 2. Explicitly disallowed items; a hit returns that item's reason.
//! 3. For `in_person_only` categories, a query containing the word `online`
//!    reverses an approval.
//! 4. Otherwise, near-miss examples and synonyms are offered as suggestions.
//!
//! Every phrase comparison uses [`phrase_matches`]: the query is a substring of
//! the candidate, or their normalized edit-distance similarity exceeds the
//! threshold.
//!
//! ```rust
//! use matcher::Matcher;
//! use policy::PolicyDocument;
//!
//! let doc = PolicyDocument::from_json_str(r#"{
//!     "categories": [
//!         { "key": "fitness", "name": "Fitness", "allowed": true,
//!           "conditions": { "in_person_only": true },
//!           "examples_included": ["gym membership", "yoga class"] }
//!     ],
//!     "not_allowed": [
//!         { "name": "Gambling", "examples": ["lottery ticket"],
//!           "reason": "Gambling-related items are not covered." }
//!     ],
//!     "responses": {
//!         "approved": "Approved — routed under {category}",
//!         "out_of_scope": "Not covered.",
//!         "online_only": "{category} benefits only cover in-person activities."
//!     }
//! }"#).unwrap();
//!
//! let matcher = Matcher::with_defaults(doc).unwrap();
//!
//! let approved = matcher.match_query("Gym Membership").unwrap();
//! assert!(approved.is_claimable);
//! assert_eq!(approved.message, "Approved — routed under Fitness");
//!
//! let denied = matcher.match_query("lottery ticket").unwrap();
//! assert_eq!(denied.message, "Gambling-related items are not covered.");
//! ```

mod engine;
mod metrics;
mod similarity;
mod suggest;
mod types;

pub use crate::engine::{evaluate, Matcher};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::similarity::{edit_distance, phrase_matches, similar, similarity};
pub use crate::types::{MatchConfig, MatchError, MatchOutcome, MatchResult};
