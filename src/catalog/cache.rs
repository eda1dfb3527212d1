use crate::catalog::{CatalogClient, Page, Result};
use crate::model::{MovieDetail, MovieSummary};
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Catalog decorator that caches detail lookups
///
/// List requests always go to the inner client; only `fetch_detail`
/// results are cached, keyed by movie ID.
pub struct CachedCatalog {
    inner: Arc<dyn CatalogClient>,
    details: Cache<i64, Arc<MovieDetail>>,
}

impl CachedCatalog {
    pub fn new(inner: Arc<dyn CatalogClient>, config: &CacheConfig) -> Self {
        let details = Cache::builder()
            .max_capacity(config.detail_max_entries)
            .time_to_live(config.detail_ttl)
            .build();

        Self { inner, details }
    }

    /// Clear all cached details
    pub fn clear(&self) {
        self.details.invalidate_all();
    }
}

#[async_trait]
impl CatalogClient for CachedCatalog {
    async fn search(&self, query: &str, page: u32) -> Result<Page<MovieSummary>> {
        self.inner.search(query, page).await
    }

    async fn discover(&self, page: u32) -> Result<Page<MovieSummary>> {
        self.inner.discover(page).await
    }

    async fn fetch_detail(&self, id: i64) -> Result<MovieDetail> {
        if let Some(cached) = self.details.get(&id).await {
            debug!(movie_id = id, "Cache hit for movie detail");
            return Ok((*cached).clone());
        }

        let detail = self.inner.fetch_detail(id).await?;
        self.details.insert(id, Arc::new(detail.clone())).await;

        Ok(detail)
    }
}

/// Detail cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached details
    pub detail_max_entries: u64,
    /// TTL for cached details
    pub detail_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            detail_max_entries: 500,
            detail_ttl: Duration::from_secs(3600), // 1 hour
        }
    }
}
