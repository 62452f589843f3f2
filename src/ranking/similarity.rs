use rapidfuzz::distance::levenshtein;

/// Levenshtein distance over chars (unit weights)
#[inline]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    levenshtein::distance(a.chars(), b.chars())
}

/// Normalized similarity in [0, 1]: `(max_len - distance) / max_len`.
///
/// Two empty strings are identical (1.0).
#[inline]
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());

    if max_len == 0 {
        return 1.0;
    }

    let dist = levenshtein_distance(a, b);
    (max_len - dist) as f64 / max_len as f64
}

/// Trim and lowercase free-text input
#[inline]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}
