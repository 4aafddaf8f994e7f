use std::collections::HashSet;

use crate::error::{PolicyError, PolicyResult};
use crate::types::{PolicyDocument, ResponseKind};

impl PolicyDocument {
    /// Check the structural rules serde cannot express.
    ///
    /// Hard failures: blank category keys or names, duplicate keys, blank
    /// disallowed reasons, missing required response templates, thresholds
    /// outside `[0, 1)`. Synonyms for unknown keys and condition flags with no
    /// enforcement rule only produce warnings.
    pub fn validate(&self) -> PolicyResult<()> {
        let mut keys = HashSet::with_capacity(self.categories.len());
        for (idx, category) in self.categories.iter().enumerate() {
            if category.key.trim().is_empty() {
                return Err(PolicyError::Invalid(format!(
                    "categories[{idx}].key must not be empty"
                )));
            }
            if category.name.trim().is_empty() {
                return Err(PolicyError::Invalid(format!(
                    "categories[{idx}].name must not be empty"
                )));
            }
            if !keys.insert(category.key.as_str()) {
                return Err(PolicyError::Invalid(format!(
                    "duplicate category key `{}`",
                    category.key
                )));
            }
            if let Some(conditions) = &category.conditions {
                for flag in conditions.unenforced() {
                    tracing::warn!(
                        category = %category.key,
                        condition = flag,
                        "condition flag is declared but not enforced"
                    );
                }
            }
        }

        for (idx, item) in self.not_allowed.iter().enumerate() {
            if item.reason.trim().is_empty() {
                return Err(PolicyError::Invalid(format!(
                    "not_allowed[{idx}] ({}) must have a reason",
                    item.name
                )));
            }
        }

        for key in self.matching.synonyms.keys() {
            if !keys.contains(key) {
                tracing::warn!(key, "synonyms registered for unknown category");
            }
        }

        for kind in ResponseKind::REQUIRED {
            if self.responses.template(kind).is_none() {
                return Err(PolicyError::MissingResponse(kind.as_str()));
            }
        }

        for (name, threshold) in [
            ("matching.fuzzy_threshold", self.matching.fuzzy_threshold),
            (
                "matching.suggestion_threshold",
                self.matching.suggestion_threshold,
            ),
        ] {
            if let Some(t) = threshold {
                if !(0.0..1.0).contains(&t) {
                    return Err(PolicyError::Invalid(format!(
                        "{name} must be in [0.0, 1.0), got {t}"
                    )));
                }
            }
        }

        if let (Some(fuzzy), Some(suggestion)) = (
            self.matching.fuzzy_threshold,
            self.matching.suggestion_threshold,
        ) {
            if suggestion > fuzzy {
                return Err(PolicyError::Invalid(format!(
                    "matching.suggestion_threshold ({suggestion}) must not exceed matching.fuzzy_threshold ({fuzzy})"
                )));
            }
        }

        Ok(())
    }
}
