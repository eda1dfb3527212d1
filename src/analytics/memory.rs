use crate::analytics::{AnalyticsStore, ExampleMovie, Result};
use crate::model::TrendRecord;
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use uuid::Uuid;

/// In-process analytics store
///
/// Records keep insertion order, so equal counts list oldest first.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<TrendRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

#[async_trait]
impl AnalyticsStore for MemoryStore {
    async fn record_search(&self, term: &str, example: &ExampleMovie) -> Result<TrendRecord> {
        let now = Utc::now();
        let mut records = self.records.lock();

        if let Some(record) = records.iter_mut().find(|r| r.term == term) {
            record.count += 1;
            record.updated_at = now;
            return Ok(record.clone());
        }

        let record = TrendRecord {
            id: Uuid::new_v4(),
            term: term.to_string(),
            count: 1,
            movie_id: example.movie_id,
            title: example.title.clone(),
            poster_url: example.poster_url.clone(),
            created_at: now,
            updated_at: now,
        };
        records.push(record.clone());

        Ok(record)
    }

    async fn list_trending(&self, limit: u32) -> Result<Vec<TrendRecord>> {
        let mut records = self.records.lock().clone();
        // Stable sort keeps insertion order among equal counts
        records.sort_by(|a, b| b.count.cmp(&a.count));
        records.truncate(limit as usize);
        Ok(records)
    }

    async fn find_by_term(&self, term: &str) -> Result<Option<TrendRecord>> {
        Ok(self.records.lock().iter().find(|r| r.term == term).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(id: i64, title: &str) -> ExampleMovie {
        ExampleMovie {
            movie_id: id,
            title: title.to_string(),
            poster_url: format!("/{id}.jpg"),
        }
    }

    #[tokio::test]
    async fn test_repeat_search_increments_and_keeps_example() {
        let store = MemoryStore::new();

        store.record_search("batman", &example(1, "Batman")).await.unwrap();
        let record = store
            .record_search("batman", &example(2, "Batman Returns"))
            .await
            .unwrap();

        assert_eq!(record.count, 2);
        assert_eq!(record.movie_id, 1);
        assert_eq!(record.title, "Batman");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_list_trending_orders_and_limits() {
        let store = MemoryStore::new();

        store.record_search("alien", &example(1, "Alien")).await.unwrap();
        for _ in 0..3 {
            store.record_search("heat", &example(2, "Heat")).await.unwrap();
        }
        store.record_search("jaws", &example(3, "Jaws")).await.unwrap();

        let trending = store.list_trending(2).await.unwrap();
        let terms: Vec<_> = trending.iter().map(|r| r.term.as_str()).collect();

        assert_eq!(terms, vec!["heat", "alien"]);
    }
}
