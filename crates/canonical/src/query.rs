//! The canonical form of an item query.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Output of [`canonicalize()`](crate::canonicalize).
///
/// `text` is what the matcher compares against policy phrases. Word-level
/// tests go through [`CanonicalQuery::has_word`], which follows UAX #29, so
/// "online-only" contains the word "online".
///
/// ```rust
/// use canonical::{canonicalize, CanonicalizeConfig};
///
/// let q = canonicalize("  Online-only YOGA  ", &CanonicalizeConfig::default()).unwrap();
/// assert_eq!(q.text, "online-only yoga");
/// assert!(q.has_word("online"));
/// assert!(!q.has_word("onl"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalQuery {
    pub text: String,
    /// Config version that produced this query.
    pub canonical_version: u32,
}

impl CanonicalQuery {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Unicode word segments of the canonical text (UAX #29).
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.unicode_words()
    }

    /// True if `word` appears as a whole word. Comparison is exact, so callers
    /// pass the word in canonical (lowercase) form.
    pub fn has_word(&self, word: &str) -> bool {
        self.words().any(|w| w == word)
    }
}

#[cfg(test)]
mod tests {
    use crate::{canonicalize, CanonicalizeConfig};

    #[test]
    fn word_boundaries_ignore_punctuation() {
        let q = canonicalize("yoga (online)", &CanonicalizeConfig::default()).expect("query");
        assert!(q.has_word("online"));
        assert_eq!(q.words().collect::<Vec<_>>(), vec!["yoga", "online"]);
    }

    #[test]
    fn substring_is_not_a_word() {
        let q = canonicalize("onlineshop voucher", &CanonicalizeConfig::default()).expect("query");
        assert!(!q.has_word("online"));
    }
}
