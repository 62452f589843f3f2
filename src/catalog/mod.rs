pub mod adjacency;
pub mod json;
pub mod memory;
pub mod shared;

use async_trait::async_trait;
use std::collections::HashSet;

use crate::core::{City, CityRecord};
use crate::error::{CoordleError, Result};

pub use adjacency::AdjacencySet;
pub use json::JsonCatalogProvider;
pub use memory::InMemoryCatalogProvider;
pub use shared::SharedCatalog;

/// Trait for catalog sources (seed files, embedded data, etc.)
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Load and validate the full catalog
    async fn load(&self) -> Result<CityCatalog>;

    /// Get provider name
    fn name(&self) -> &str;
}

/// Immutable, ordered collection of cities plus the country adjacency set.
///
/// The daily secret is picked by position, so the order of `cities` is part of
/// the puzzle: appending entries changes the answer for every date going
/// forward, and reordering or removing entries reassigns past answers as well.
/// Operators must treat the seed file as append-only and accept that even
/// appends reshuffle future days.
#[derive(Debug, Clone)]
pub struct CityCatalog {
    cities: Vec<City>,
    adjacency: AdjacencySet,
}

impl CityCatalog {
    /// Build a catalog from seed records, assigning missing ids and slugs.
    ///
    /// Rejects non-finite or out-of-range coordinates, blank names or country
    /// codes, and duplicate ids or slugs.
    ///
    /// Duplicate display names are accepted (Paris FR and Paris US). Only the
    /// first of them resolves by name; the others are reachable by slug.
    pub fn from_records(records: Vec<CityRecord>, adjacency: AdjacencySet) -> Result<Self> {
        let mut cities = Vec::with_capacity(records.len());
        let mut ids = HashSet::with_capacity(records.len());
        let mut slugs = HashSet::with_capacity(records.len());
        let mut names = HashSet::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            validate_record(&record)?;
            let city = City::from_record(record, index);

            if !ids.insert(city.id) {
                return Err(CoordleError::DuplicateCity {
                    field: "id",
                    value: city.id.to_string(),
                });
            }
            if !slugs.insert(city.slug.to_lowercase()) {
                return Err(CoordleError::DuplicateCity {
                    field: "slug",
                    value: city.slug.clone(),
                });
            }

            if !names.insert(city.name.to_lowercase()) {
                tracing::warn!(
                    "⚠️ Duplicate city name '{}', {} only resolves by slug '{}'",
                    city.name,
                    city.display_name(),
                    city.slug
                );
            }

            cities.push(city);
        }

        Ok(Self { cities, adjacency })
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn adjacency(&self) -> &AdjacencySet {
        &self.adjacency
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn get_by_id(&self, id: u64) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }
}

fn validate_record(record: &CityRecord) -> Result<()> {
    let invalid = |reason: &str| CoordleError::InvalidCity {
        name: record.name.clone(),
        reason: reason.to_string(),
    };

    if record.name.trim().is_empty() {
        return Err(invalid("empty name"));
    }
    if record.country_code.trim().is_empty() {
        return Err(invalid("empty country code"));
    }
    if !record.lat.is_finite() || !(-90.0..=90.0).contains(&record.lat) {
        return Err(invalid(&format!("latitude out of range: {}", record.lat)));
    }
    if !record.lon.is_finite() || !(-180.0..=180.0).contains(&record.lon) {
        return Err(invalid(&format!("longitude out of range: {}", record.lon)));
    }

    Ok(())
}
