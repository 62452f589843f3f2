use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::catalog::{CatalogProvider, CityCatalog};
use crate::error::Result;

/// Lazily loaded catalog shared by every request.
///
/// The first caller runs the provider; callers arriving while that load is in
/// flight wait for its result instead of starting their own. A failed load is
/// not cached, the next caller retries. There is no invalidation: a fresh
/// catalog needs a fresh `SharedCatalog`.
pub struct SharedCatalog {
    provider: Arc<dyn CatalogProvider>,
    cell: OnceCell<Arc<CityCatalog>>,
}

impl SharedCatalog {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self {
            provider,
            cell: OnceCell::new(),
        }
    }

    /// Wrap an already built catalog
    pub fn preloaded(provider: Arc<dyn CatalogProvider>, catalog: CityCatalog) -> Self {
        Self {
            provider,
            cell: OnceCell::new_with(Some(Arc::new(catalog))),
        }
    }

    /// Get the catalog, loading it on first access
    pub async fn get(&self) -> Result<Arc<CityCatalog>> {
        let catalog = self
            .cell
            .get_or_try_init(|| async {
                tracing::debug!("Loading catalog from provider '{}'", self.provider.name());
                self.provider.load().await.map(Arc::new)
            })
            .await?;

        Ok(Arc::clone(catalog))
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}
