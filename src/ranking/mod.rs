pub mod similarity;
pub mod suggestions;

use crate::core::City;

pub use similarity::{levenshtein_distance, normalize_query, similarity};
pub use suggestions::{rank, SuggestionRanker};

/// Trait for scoring catalog cities against a partial query
pub trait Ranker: Send + Sync {
    /// Rank cities against query, return sorted by score (highest first), at most `limit`
    fn rank<'a>(&self, query: &str, cities: &'a [City], limit: usize) -> Vec<RankedCity<'a>>;

    /// Get ranker name for logging
    fn name(&self) -> &str;
}

/// City with similarity score
#[derive(Debug, Clone, Copy)]
pub struct RankedCity<'a> {
    pub city: &'a City,
    pub score: f64,
}

impl<'a> RankedCity<'a> {
    pub fn new(city: &'a City, score: f64) -> Self {
        Self { city, score }
    }
}
