//! Did-you-mean candidate collection.

use std::collections::HashSet;

use crate::similarity::similar;

/// A policy phrase in both authored and canonical form.
#[derive(Debug, Clone)]
pub(crate) struct Term {
    /// As written in the policy; what users see in suggestions.
    pub display: String,
    /// Canonical form used for comparisons.
    pub normalized: String,
}

/// Candidates similar to `query` at `threshold`, in the order given,
/// deduplicated by authored text.
pub(crate) fn collect<'a, I>(query: &str, candidates: I, threshold: f32) -> Vec<String>
where
    I: IntoIterator<Item = &'a Term>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for term in candidates {
        if !similar(query, &term.normalized, threshold) {
            continue;
        }
        if seen.insert(term.display.as_str()) {
            out.push(term.display.clone());
        }
    }
    out
}
