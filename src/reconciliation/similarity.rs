//! Normalized edit-distance similarity for fuzzy description matching

/// Unit-cost Levenshtein distance (insertions, deletions, substitutions)
/// over Unicode scalar values.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row dynamic programming table
    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr: Vec<usize> = vec![0; a.len() + 1];

    for (j, bc) in b.iter().enumerate() {
        curr[0] = j + 1;
        for (i, ac) in a.iter().enumerate() {
            let substitution = prev[i] + usize::from(ac != bc);
            curr[i + 1] = substitution.min(prev[i + 1] + 1).min(curr[i] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}

/// Case-insensitive normalized similarity between two strings, in `[0, 1]`.
///
/// With `d` the Levenshtein distance over the lowercased inputs and `L` the
/// longer lowercased length, the result is `(L - d) / L`. Two empty strings
/// are trivially identical, so the result is `1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let longer = a.chars().count().max(b.chars().count());
    if longer == 0 {
        return 1.0;
    }

    (longer - levenshtein(&a, &b)) as f64 / longer as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_known_distances() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("acme", "acme"), 0);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn test_similarity_identity() {
        assert_eq!(similarity("Acme Corp", "Acme Corp"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn test_similarity_case_insensitive() {
        assert_eq!(similarity("ACME CORP", "acme corp"), 1.0);
        assert_eq!(similarity("AcMe", "aCmE"), 1.0);
    }

    #[test]
    fn test_similarity_symmetry() {
        let pairs = [
            ("Acme Corp", "Acme Corp Ltd"),
            ("Globex", "Initech"),
            ("", "payment"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn test_similarity_normalization() {
        // d("kitten", "sitting") = 3, longer = 7
        assert!((similarity("kitten", "sitting") - 4.0 / 7.0).abs() < 1e-12);
        // Completely different, equal-length strings
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_similarity_decreases_with_edits() {
        let base = "acme corporation";
        let one_edit = similarity(base, "acme corporatio");
        let two_edits = similarity(base, "acme corporati");
        assert!(one_edit < 1.0);
        assert!(two_edits < one_edit);
        assert!(two_edits >= 0.0);
    }

    #[test]
    fn test_similarity_empty_versus_nonempty() {
        assert_eq!(similarity("", "acme"), 0.0);
    }
}
