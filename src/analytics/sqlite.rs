use crate::analytics::{AnalyticsStore, ExampleMovie, Result};
use crate::model::TrendRecord;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;

const RECORD_COLUMNS: &str = "id, term, count, movie_id, title, poster_url, created_at, updated_at";

/// Analytics store backed by SQLite
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `url` and run migrations
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let in_memory = url.contains(":memory:");

        if !in_memory
            && let Some(parent) = options.get_filename().parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        // An in-memory database lives only as long as its single connection
        let pool = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?
        };

        info!("Connected analytics store at {}", url);
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, running migrations
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl AnalyticsStore for SqliteStore {
    async fn record_search(&self, term: &str, example: &ExampleMovie) -> Result<TrendRecord> {
        let now = Utc::now();

        // Conflict on the unique term only bumps the counter
        let record = sqlx::query_as::<_, TrendRecord>(&format!(
            "INSERT INTO search_terms ({RECORD_COLUMNS}) \
             VALUES (?, ?, 1, ?, ?, ?, ?, ?) \
             ON CONFLICT(term) DO UPDATE SET count = count + 1, updated_at = excluded.updated_at \
             RETURNING {RECORD_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(term)
        .bind(example.movie_id)
        .bind(&example.title)
        .bind(&example.poster_url)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn list_trending(&self, limit: u32) -> Result<Vec<TrendRecord>> {
        let records = sqlx::query_as::<_, TrendRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM search_terms \
             ORDER BY count DESC, created_at ASC LIMIT ?"
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn find_by_term(&self, term: &str) -> Result<Option<TrendRecord>> {
        let record = sqlx::query_as::<_, TrendRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM search_terms WHERE term = ?"
        ))
        .bind(term)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn example(id: i64, title: &str) -> ExampleMovie {
        ExampleMovie {
            movie_id: id,
            title: title.to_string(),
            poster_url: format!("https://image.tmdb.org/t/p/w500/{id}.jpg"),
        }
    }

    async fn memory_store() -> SqliteStore {
        SqliteStore::connect("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn test_first_search_creates_record() {
        let store = memory_store().await;

        let record = store
            .record_search("inception", &example(27205, "Inception"))
            .await
            .unwrap();

        assert_eq!(record.term, "inception");
        assert_eq!(record.count, 1);
        assert_eq!(record.movie_id, 27205);
        assert_eq!(record.poster_url, "https://image.tmdb.org/t/p/w500/27205.jpg");
    }

    #[tokio::test]
    async fn test_repeat_search_increments_without_replacing_example() {
        let store = memory_store().await;

        let first = store
            .record_search("batman", &example(268, "Batman"))
            .await
            .unwrap();
        let second = store
            .record_search("batman", &example(364, "Batman Returns"))
            .await
            .unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.count, 2);
        assert_eq!(second.movie_id, 268);
        assert_eq!(second.title, "Batman");
    }

    #[tokio::test]
    async fn test_list_trending_is_sorted_and_capped() {
        let store = memory_store().await;

        for (term, times) in [("alien", 1), ("heat", 4), ("jaws", 2), ("up", 3)] {
            for _ in 0..times {
                store.record_search(term, &example(1, term)).await.unwrap();
            }
        }

        let trending = store.list_trending(3).await.unwrap();
        let counts: Vec<_> = trending.iter().map(|r| (r.term.as_str(), r.count)).collect();

        assert_eq!(counts, vec![("heat", 4), ("up", 3), ("jaws", 2)]);
    }

    #[tokio::test]
    async fn test_find_by_term_is_exact() {
        let store = memory_store().await;
        store
            .record_search("Batman", &example(268, "Batman"))
            .await
            .unwrap();

        assert!(store.find_by_term("Batman").await.unwrap().is_some());
        assert!(store.find_by_term("batman").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_database_persists_across_connections() {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite://{}", dir.path().join("nested/analytics.db").display());

        {
            let store = SqliteStore::connect(&url).await.unwrap();
            store.record_search("heat", &example(949, "Heat")).await.unwrap();
            store.pool().close().await;
        }

        let store = SqliteStore::connect(&url).await.unwrap();
        let record = store.find_by_term("heat").await.unwrap().unwrap();
        assert_eq!(record.count, 1);
    }
}
