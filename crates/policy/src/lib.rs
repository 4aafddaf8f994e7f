//! # Benefits policy documents (`policy`)
//!
//! Schema, loading and validation for the JSON policy documents the matcher
//! evaluates queries against. A document is loaded once, validated, and then
//! shared read-only (usually behind an `Arc`) by every evaluation.
//!
//! ## Document format
//!
//! ```json
//! {
//!   "categories": [
//!     {
//!       "key": "fitness",
//!       "name": "Fitness",
//!       "allowed": true,
//!       "conditions": { "in_person_only": true },
//!       "examples_included": ["gym membership", "yoga mat"],
//!       "examples_excluded": ["apparel rental"]
//!     }
//!   ],
//!   "not_allowed": [
//!     {
//!       "name": "Gambling",
//!       "examples": ["lottery ticket"],
//!       "reason": "Gambling-related items are not covered."
//!     }
//!   ],
//!   "matching": { "synonyms": { "fitness": ["spin class"] } },
//!   "responses": {
//!     "approved": "Approved — routed under {category}",
//!     "out_of_scope": "Not covered.",
//!     "online_only": "{category} is only covered in person."
//!   },
//!   "default_behavior": { "deny_if_unlisted": true }
//! }
//! ```
//!
//! `categories`, `not_allowed` and `responses` are required; `matching` and
//! `default_behavior` default to empty and `deny_if_unlisted: true`.
//!
//! ## Example
//!
//! ```rust
//! use policy::{PolicyDocument, ResponseKind};
//!
//! let doc = PolicyDocument::from_json_str(r#"{
//!     "categories": [
//!         { "key": "fitness", "name": "Fitness", "allowed": true,
//!           "examples_included": ["gym membership"] }
//!     ],
//!     "not_allowed": [],
//!     "matching": { "synonyms": { "fitness": ["spin class"] } },
//!     "responses": {
//!         "approved": "Approved — routed under {category}",
//!         "out_of_scope": "Not covered.",
//!         "online_only": "In person only."
//!     }
//! }"#).expect("valid policy");
//!
//! assert_eq!(doc.synonyms_for("fitness"), ["spin class".to_string()]);
//! assert_eq!(
//!     doc.responses.render(ResponseKind::Approved, Some("Fitness")),
//!     "Approved — routed under Fitness"
//! );
//! assert!(doc.default_behavior.deny_if_unlisted);
//! ```

mod error;
mod load;
mod types;
mod validate;

pub use crate::error::{PolicyError, PolicyResult};
pub use crate::types::{
    Category, Conditions, DefaultBehavior, DisallowedItem, MatchingSection, PolicyDocument,
    ResponseKind, Responses, SynonymTable, CATEGORY_PLACEHOLDER, SUGGESTIONS_PLACEHOLDER,
};
