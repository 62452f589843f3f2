use std::collections::HashSet;

/// Symmetric relation over country codes indicating shared borders.
///
/// Pairs are stored in canonical order so `(A, B)` and `(B, A)` are the same entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencySet {
    pairs: HashSet<(String, String)>,
}

impl AdjacencySet {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(a: &str, b: &str) -> (String, String) {
        let a = a.trim().to_uppercase();
        let b = b.trim().to_uppercase();
        if a <= b { (a, b) } else { (b, a) }
    }

    /// Insert an unordered pair, returns false if it was already present
    pub fn insert(&mut self, a: &str, b: &str) -> bool {
        self.pairs.insert(Self::key(a, b))
    }

    /// Whether the two countries share a border
    pub fn are_neighbors(&self, a: &str, b: &str) -> bool {
        self.pairs.contains(&Self::key(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<A, B> FromIterator<(A, B)> for AdjacencySet
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (A, B)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (a, b) in iter {
            set.insert(a.as_ref(), b.as_ref());
        }
        set
    }
}
