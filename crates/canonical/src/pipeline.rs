use std::borrow::Cow;

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::CanonicalizeConfig;
use crate::error::CanonicalError;
use crate::query::CanonicalQuery;

/// Main entry point. Normalizes a raw item query into the form the matcher
/// compares against policy phrases.
pub fn canonicalize(
    input: &str,
    cfg: &CanonicalizeConfig,
) -> Result<CanonicalQuery, CanonicalError> {
    cfg.validate()?;

    let text = normalize(input, cfg);

    if text.is_empty() {
        return Err(CanonicalError::EmptyInput);
    }
    let len = text.chars().count();
    if len > cfg.max_chars {
        return Err(CanonicalError::TooLong {
            len,
            max: cfg.max_chars,
        });
    }

    Ok(CanonicalQuery {
        text,
        canonical_version: cfg.version,
    })
}

/// Normalizes a policy phrase (an example, synonym or reason key) with the same
/// transforms as [`canonicalize`], without the query-only checks.
///
/// ```rust
/// use canonical::{normalize_term, CanonicalizeConfig};
///
/// let cfg = CanonicalizeConfig::default();
/// assert_eq!(normalize_term("  Gym   MEMBERSHIP ", &cfg), "gym membership");
/// assert_eq!(normalize_term("   ", &cfg), "");
/// ```
pub fn normalize_term(input: &str, cfg: &CanonicalizeConfig) -> String {
    normalize(input, cfg)
}

fn normalize(input: &str, cfg: &CanonicalizeConfig) -> String {
    // Normalization goes first because it can change grapheme boundaries.
    let normalized: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(input.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(input)
    };

    let mut state = Builder::with_capacity(normalized.len());
    for grapheme in normalized.graphemes(true) {
        // Lowercasing can expand one char into several (e.g. 'İ').
        if cfg.lowercase {
            for ch in grapheme.to_lowercase().chars() {
                state.push(ch, cfg);
            }
        } else {
            for ch in grapheme.chars() {
                state.push(ch, cfg);
            }
        }
    }
    state.finish()
}

/// Whitespace-collapsing state machine. Leading and trailing delimiters never
/// reach the output.
struct Builder {
    text: String,
    pending_space: bool,
}

impl Builder {
    fn with_capacity(cap: usize) -> Self {
        Self {
            text: String::with_capacity(cap),
            pending_space: false,
        }
    }

    fn push(&mut self, ch: char, cfg: &CanonicalizeConfig) {
        let is_delim = ch.is_whitespace() || (cfg.strip_punctuation && ch.is_punctuation());
        if is_delim {
            if !self.text.is_empty() {
                self.pending_space = true;
            }
            return;
        }

        if self.pending_space {
            self.text.push(' ');
            self.pending_space = false;
        }
        self.text.push(ch);
    }

    fn finish(self) -> String {
        self.text
    }
}
