//! Search-term analytics.
//!
//! The store keeps one record per search term with a usage counter and an
//! example movie. [`Analytics`] wraps a store for callers that must never be
//! affected by analytics failures: errors are logged and swallowed.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::catalog::ImageUrls;
use crate::model::{MovieSummary, TrendRecord};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Analytics result type
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Analytics store errors
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Movie captured alongside a search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleMovie {
    pub movie_id: i64,
    pub title: String,
    pub poster_url: String,
}

impl ExampleMovie {
    pub fn from_summary(movie: &MovieSummary, images: &ImageUrls) -> Self {
        Self {
            movie_id: movie.id,
            title: movie.title.clone(),
            poster_url: images.poster(movie.poster_path.as_deref()),
        }
    }
}

/// Document store holding search-term counters
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    /// Create the record for `term` with count 1, or increment its count
    ///
    /// The example movie is only written when the record is created.
    async fn record_search(&self, term: &str, example: &ExampleMovie) -> Result<TrendRecord>;

    /// Records ordered by count descending, at most `limit`
    async fn list_trending(&self, limit: u32) -> Result<Vec<TrendRecord>>;

    /// Exact-match lookup by term
    async fn find_by_term(&self, term: &str) -> Result<Option<TrendRecord>>;
}

/// Failure-isolated access to an analytics store
#[derive(Clone)]
pub struct Analytics {
    store: Arc<dyn AnalyticsStore>,
    images: ImageUrls,
}

impl Analytics {
    pub fn new(store: Arc<dyn AnalyticsStore>, images: ImageUrls) -> Self {
        Self { store, images }
    }

    /// Count one search for `term`, remembering `movie` on first sight
    ///
    /// Empty terms are ignored. Failures are logged, never returned.
    pub async fn record_search(&self, term: &str, movie: &MovieSummary) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }

        let example = ExampleMovie::from_summary(movie, &self.images);
        match self.store.record_search(term, &example).await {
            Ok(record) => debug!(term, count = record.count, "Recorded search"),
            Err(e) => warn!(term, "Failed to record search: {}", e),
        }
    }

    /// Top search terms; empty when the store is unreachable
    pub async fn list_trending(&self, limit: u32) -> Vec<TrendRecord> {
        self.store.list_trending(limit).await.unwrap_or_else(|e| {
            warn!(limit, "Failed to fetch trending searches: {}", e);
            Vec::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store that rejects every call
    struct UnreachableStore;

    #[async_trait]
    impl AnalyticsStore for UnreachableStore {
        async fn record_search(&self, _term: &str, _example: &ExampleMovie) -> Result<TrendRecord> {
            Err(AnalyticsError::Unavailable("offline".to_string()))
        }

        async fn list_trending(&self, _limit: u32) -> Result<Vec<TrendRecord>> {
            Err(AnalyticsError::Unavailable("offline".to_string()))
        }

        async fn find_by_term(&self, _term: &str) -> Result<Option<TrendRecord>> {
            Err(AnalyticsError::Unavailable("offline".to_string()))
        }
    }

    fn movie() -> MovieSummary {
        MovieSummary::new(268, "Batman").with_poster(Some("/batman.jpg".to_string()))
    }

    #[tokio::test]
    async fn test_record_search_stores_poster_url() {
        let store = Arc::new(MemoryStore::new());
        let analytics = Analytics::new(store.clone(), ImageUrls::default());

        analytics.record_search("batman", &movie()).await;

        let record = store.find_by_term("batman").await.unwrap().unwrap();
        assert_eq!(record.count, 1);
        assert_eq!(record.movie_id, 268);
        assert_eq!(
            record.poster_url,
            "https://image.tmdb.org/t/p/w500/batman.jpg"
        );
    }

    #[tokio::test]
    async fn test_empty_term_is_ignored() {
        let store = Arc::new(MemoryStore::new());
        let analytics = Analytics::new(store.clone(), ImageUrls::default());

        analytics.record_search("   ", &movie()).await;

        assert!(store.list_trending(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failures_are_swallowed() {
        let analytics = Analytics::new(Arc::new(UnreachableStore), ImageUrls::default());

        analytics.record_search("batman", &movie()).await;
        assert!(analytics.list_trending(5).await.is_empty());
    }
}
