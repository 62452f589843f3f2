use crate::core::City;
use crate::ranking::similarity::{normalize_query, similarity};
use crate::ranking::{RankedCity, Ranker};

/// Scores at or below this are never suggested
pub const MIN_SUGGESTION_SCORE: f64 = 0.4;

const EXACT_SCORE: f64 = 1.0;
const PREFIX_SCORE: f64 = 0.9;
const CONTAINS_SCORE: f64 = 0.7;

/// Autocomplete ranker: exact > prefix > substring > edit similarity
pub struct SuggestionRanker;

impl SuggestionRanker {
    pub fn new() -> Self {
        Self
    }

    /// Score one lowercase name against an already normalized query
    pub fn score(query: &str, name_lower: &str) -> f64 {
        if name_lower == query {
            EXACT_SCORE
        } else if name_lower.starts_with(query) {
            PREFIX_SCORE
        } else if name_lower.contains(query) {
            CONTAINS_SCORE
        } else {
            similarity(query, name_lower)
        }
    }
}

impl Default for SuggestionRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker for SuggestionRanker {
    fn rank<'a>(&self, query: &str, cities: &'a [City], limit: usize) -> Vec<RankedCity<'a>> {
        let query = normalize_query(query);
        if query.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<RankedCity<'a>> = cities
            .iter()
            .map(|city| RankedCity::new(city, Self::score(&query, &city.name.to_lowercase())))
            .filter(|r| r.score > MIN_SUGGESTION_SCORE)
            .collect();

        // Stable: equal scores keep catalog order
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(limit);

        tracing::debug!("Ranked {} suggestions for '{}'", ranked.len(), query);

        ranked
    }

    fn name(&self) -> &str {
        "suggestions"
    }
}

/// Rank catalog cities for autocomplete, best first, at most `limit`
pub fn rank<'a>(query: &str, cities: &'a [City], limit: usize) -> Vec<&'a City> {
    SuggestionRanker::new()
        .rank(query, cities, limit)
        .into_iter()
        .map(|r| r.city)
        .collect()
}
