use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::catalog::{AdjacencySet, CatalogProvider, CityCatalog};
use crate::core::CityRecord;
use crate::error::Result;

/// Catalog provider over records already in memory (embedding, tests)
pub struct InMemoryCatalogProvider {
    records: Vec<CityRecord>,
    neighbors: Vec<(String, String)>,
    loads: AtomicUsize,
}

impl InMemoryCatalogProvider {
    pub fn new(records: Vec<CityRecord>) -> Self {
        Self {
            records,
            neighbors: Vec::new(),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn with_neighbors(mut self, pairs: &[(&str, &str)]) -> Self {
        self.neighbors = pairs
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();
        self
    }

    /// Number of times `load` has run
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalogProvider {
    async fn load(&self) -> Result<CityCatalog> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        // Give concurrent callers a chance to pile up behind the first load
        tokio::task::yield_now().await;

        let adjacency: AdjacencySet = self.neighbors.iter().cloned().collect();
        CityCatalog::from_records(self.records.clone(), adjacency)
    }

    fn name(&self) -> &str {
        "memory"
    }
}
