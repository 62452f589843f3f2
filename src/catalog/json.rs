use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::catalog::{AdjacencySet, CatalogProvider, CityCatalog};
use crate::core::CityRecord;
use crate::error::{CoordleError, Result};

/// Seed-file catalog provider
///
/// Cities file: JSON array of city records
/// ```json
/// [{ "name": "Paris", "country_code": "FR", "lat": 48.85, "lon": 2.35, "population": 2148000 }]
/// ```
/// Neighbors file: JSON array of country-code pairs
/// ```json
/// [["FR", "DE"], ["FR", "ES"]]
/// ```
pub struct JsonCatalogProvider {
    cities_path: PathBuf,
    neighbors_path: Option<PathBuf>,
}

impl JsonCatalogProvider {
    /// Create a provider. Without a neighbors file every country pair is "other".
    pub fn new(cities_path: impl Into<PathBuf>, neighbors_path: Option<PathBuf>) -> Self {
        Self {
            cities_path: cities_path.into(),
            neighbors_path,
        }
    }

    /// Parse a cities document
    pub fn parse_cities(json: &str) -> Result<Vec<CityRecord>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a neighbors document
    pub fn parse_neighbors(json: &str) -> Result<AdjacencySet> {
        let pairs: Vec<(String, String)> = serde_json::from_str(json)?;
        Ok(pairs.into_iter().collect())
    }

    async fn read(path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            CoordleError::Catalog(format!("Failed to read {}: {}", path.display(), e))
        })
    }
}

#[async_trait]
impl CatalogProvider for JsonCatalogProvider {
    async fn load(&self) -> Result<CityCatalog> {
        let records = Self::parse_cities(&Self::read(&self.cities_path).await?)?;

        let adjacency = match &self.neighbors_path {
            Some(path) => Self::parse_neighbors(&Self::read(path).await?)?,
            None => {
                tracing::warn!("⚠️ No neighbors file configured, country feedback will never report neighbors");
                AdjacencySet::new()
            }
        };

        let catalog = CityCatalog::from_records(records, adjacency)?;

        tracing::info!(
            "✅ Loaded {} cities and {} neighbor pairs from {}",
            catalog.len(),
            catalog.adjacency().len(),
            self.cities_path.display()
        );

        Ok(catalog)
    }

    fn name(&self) -> &str {
        "json"
    }
}
