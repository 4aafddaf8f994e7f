//! Normalized edit-distance similarity.
//!
//! Distances and lengths are counted in chars (Unicode scalar values), so
//! "café" has length 4. Scores are computed in `f32` and compared strictly
//! against the threshold: `similar` is true iff `score > threshold`.

/// Levenshtein distance between `a` and `b`.
///
/// Insertion, deletion and substitution each cost 1. Exact DP over two rolling
/// rows of the table; O(len(a)·len(b)) time, O(len(b)) space.
///
/// ```rust
/// use matcher::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("yogaa mat", "yoga mat"), 1);
/// assert_eq!(edit_distance("", "gym"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// `1 - edit_distance(a, b) / max(len(a), len(b))`, in `[0.0, 1.0]`.
///
/// Two empty strings score 1.0.
pub fn similarity(a: &str, b: &str) -> f32 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - (edit_distance(a, b) as f32 / max_len as f32)
}

/// True iff `similarity(a, b) > threshold`. Two empty strings are always similar.
///
/// ```rust
/// use matcher::similar;
///
/// assert!(similar("gym", "gym", 0.99));
/// assert!(!similar("gym", "zzz", 0.99));
/// assert!(similar("", "", 1.0));
/// ```
pub fn similar(a: &str, b: &str, threshold: f32) -> bool {
    if a.is_empty() && b.is_empty() {
        return true;
    }
    similarity(a, b) > threshold
}

/// The substring-or-similarity rule used at every matching step.
///
/// `query` matches `candidate` if it is a substring of it, or if the two are
/// [`similar`] at `threshold`. Both sides must already be canonical
/// (lowercase, collapsed whitespace).
///
/// ```rust
/// use matcher::phrase_matches;
///
/// assert!(phrase_matches("gym", "gym membership", 0.7));
/// assert!(phrase_matches("yogaa mat", "yoga mat", 0.7));
/// assert!(!phrase_matches("gym membership", "gym", 0.7));
/// ```
pub fn phrase_matches(query: &str, candidate: &str, threshold: f32) -> bool {
    candidate.contains(query) || similar(query, candidate, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        for (a, b) in [("gym", "gum"), ("yoga mat", "yogaa mat"), ("", "abc"), ("flaw", "lawn")] {
            assert_eq!(edit_distance(a, b), edit_distance(b, a), "{a} / {b}");
        }
    }

    #[test]
    fn distance_counts_chars_not_bytes() {
        assert_eq!(edit_distance("café", "cafe"), 1);
        assert_eq!(edit_distance("über", "uber"), 1);
        assert!((similarity("café", "cafe") - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(edit_distance("personal trainer", "personal trainer"), 0);
        assert_eq!(similarity("personal trainer", "personal trainer"), 1.0);
    }

    #[test]
    fn one_empty_side_scores_zero() {
        assert_eq!(similarity("", "gym"), 0.0);
        assert!(!similar("", "gym", 0.0));
    }

    #[test]
    fn threshold_is_strict() {
        // 1 - 1/4 = 0.75 exactly.
        assert!(!similar("abcd", "abce", 0.75));
        assert!(similar("abcd", "abce", 0.74));
    }

    #[test]
    fn typo_passes_match_threshold() {
        let score = similarity("yogaa mat", "yoga mat");
        assert!(score > 0.88 && score < 0.89, "score was {score}");
        assert!(similar("yogaa mat", "yoga mat", 0.7));
    }

    #[test]
    fn substring_direction_matters() {
        assert!(phrase_matches("trainer", "personal trainer", 0.7));
        assert!(!phrase_matches("personal trainer at home", "personal trainer", 0.7));
    }
}
