//! Free-text guess resolution.
//!
//! A query is trimmed and lowercased, then run through a cascade where each
//! stage scans the whole catalog before the next one is tried:
//! exact name, exact slug, name substring, then fuzzy name similarity.

use crate::core::City;
use crate::ranking::similarity::{normalize_query, similarity};

/// Minimum similarity for a fuzzy match to count
pub const FUZZY_THRESHOLD: f64 = 0.6;

/// Which cascade stage produced the match
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchStage {
    Name,
    Slug,
    Substring,
    Fuzzy { score: f64 },
}

/// Outcome of resolving a query
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    Found { city: &'a City, stage: MatchStage },
    NotFound,
}

impl<'a> Resolution<'a> {
    pub fn city(&self) -> Option<&'a City> {
        match *self {
            Resolution::Found { city, .. } => Some(city),
            Resolution::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found { .. })
    }
}

/// Map player input to a catalog city.
///
/// Substring hits return the first city in catalog order, so with several
/// candidates ("York" inside "New York" and "Yorktown") the catalog order
/// decides. Fuzzy ties also go to the earliest city. A blank query is
/// `NotFound`.
pub fn resolve<'a>(query: &str, cities: &'a [City]) -> Resolution<'a> {
    let query = normalize_query(query);
    if query.is_empty() {
        return Resolution::NotFound;
    }

    let names: Vec<String> = cities.iter().map(|c| c.name.to_lowercase()).collect();

    if let Some(i) = names.iter().position(|name| *name == query) {
        return found(&query, &cities[i], MatchStage::Name);
    }

    if let Some(i) = cities.iter().position(|c| c.slug.to_lowercase() == query) {
        return found(&query, &cities[i], MatchStage::Slug);
    }

    if let Some(i) = names.iter().position(|name| name.contains(query.as_str())) {
        return found(&query, &cities[i], MatchStage::Substring);
    }

    let mut best: Option<(usize, f64)> = None;
    for (i, name) in names.iter().enumerate() {
        let score = similarity(&query, name);
        // Strict comparison keeps the first city on ties
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((i, score));
        }
    }

    match best {
        Some((i, score)) if score >= FUZZY_THRESHOLD => found(&query, &cities[i], MatchStage::Fuzzy { score }),
        _ => {
            tracing::debug!("No city matches '{}'", query);
            Resolution::NotFound
        }
    }
}

fn found<'a>(query: &str, city: &'a City, stage: MatchStage) -> Resolution<'a> {
    tracing::debug!("Resolved '{}' → {} via {:?}", query, city.name, stage);
    Resolution::Found { city, stage }
}
