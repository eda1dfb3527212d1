use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Search-term usage counter stored in the analytics store
///
/// Created on the first search for `term` that yields results, then
/// incremented on every repeat. The example movie is captured once at
/// creation and never replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TrendRecord {
    /// Document ID
    pub id: Uuid,
    /// Search term (unique)
    pub term: String,
    /// Number of searches for this term
    pub count: i64,
    /// Example movie captured from the first result
    pub movie_id: i64,
    pub title: String,
    /// Full poster URL of the example movie
    pub poster_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
