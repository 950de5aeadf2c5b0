//! Levenshtein edit distance and the normalized similarity built on it.
//!
//! Both work on chars, not bytes, so lengths and distances share a unit.

/// Minimum number of single-char insertions, deletions or substitutions
/// turning `a` into `b`.
pub fn distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let len_b = b_chars.len();

    if a.is_empty() {
        return len_b;
    }
    if len_b == 0 {
        return a.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=len_b).collect();
    let mut curr_row = vec![0; len_b + 1];

    for (i, ca) in a.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len_b]
}

/// Closeness in `[0, 1]`: 1.0 for identical strings, 0.0 when every char of
/// the longer string has to change.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());

    if max_len == 0 {
        return 1.0;
    }

    1.0 - distance(a, b) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_distance_known_pairs() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
        assert_eq!(distance("engine/stop", "engine/start"), 3);
        assert_eq!(distance("abc", "abc"), 0);
    }

    #[test]
    fn test_distance_empty() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abcd", ""), 4);
    }

    #[test]
    fn test_distance_counts_chars() {
        assert_eq!(distance("café", "cafe"), 1);
        assert_eq!(distance("", "ñü"), 2);
    }

    #[test]
    fn test_similarity_bounds() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("", "abc"), 0.0);
        assert_eq!(similarity("abc", ""), 0.0);
        assert_eq!(similarity("abc", "xyz"), 0.0);
        assert_eq!(similarity("engine", "engine"), 1.0);
    }

    #[test]
    fn test_similarity_partial() {
        // 3 edits over 12 chars
        let s = similarity("engine/start", "engine/stop");
        assert!((s - 0.75).abs() < 1e-12);

        // one char of four differs, measured in chars not bytes
        assert!((similarity("café", "cafe") - 0.75).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_similarity_reflexive(s in "\\PC{0,24}") {
            prop_assert_eq!(similarity(&s, &s), 1.0);
        }

        #[test]
        fn prop_distance_symmetric(a in "\\PC{0,16}", b in "\\PC{0,16}") {
            prop_assert_eq!(distance(&a, &b), distance(&b, &a));
        }

        #[test]
        fn prop_distance_bounds(a in "[a-z]{0,16}", b in "[a-z]{0,16}") {
            let d = distance(&a, &b);
            let (la, lb) = (a.chars().count(), b.chars().count());
            prop_assert!(d >= la.abs_diff(lb));
            prop_assert!(d <= la.max(lb));
        }

        #[test]
        fn prop_similarity_in_unit_range(a in "\\PC{0,16}", b in "\\PC{0,16}") {
            let s = similarity(&a, &b);
            prop_assert!((0.0..=1.0).contains(&s));
        }
    }
}
