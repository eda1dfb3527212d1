use crate::catalog::Result;
use crate::model::{MovieDetail, MovieSummary};
use async_trait::async_trait;
use serde::Serialize;

/// One page of a paginated list response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u64,
}

impl<T> Page<T> {
    pub fn empty(page: u32) -> Self {
        Self {
            results: Vec::new(),
            page,
            total_pages: 0,
            total_results: 0,
        }
    }
}

/// A list fetch: search when the query has content, otherwise discover
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRequest {
    Search { query: String, page: u32 },
    Discover { page: u32 },
}

impl ListRequest {
    /// Choose the endpoint for a settled query
    pub fn for_query(query: &str, page: u32) -> Self {
        let query = query.trim();
        if query.is_empty() {
            Self::Discover { page }
        } else {
            Self::Search {
                query: query.to_string(),
                page,
            }
        }
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        match self {
            Self::Search { page, .. } | Self::Discover { page } => *page,
        }
    }

    /// Search term, if this is a search
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        match self {
            Self::Search { query, .. } => Some(query),
            Self::Discover { .. } => None,
        }
    }
}

/// Read access to the movie catalog
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Search movies by title
    async fn search(&self, query: &str, page: u32) -> Result<Page<MovieSummary>>;

    /// Browse movies by popularity
    async fn discover(&self, page: u32) -> Result<Page<MovieSummary>>;

    /// Fetch one movie, including cast
    async fn fetch_detail(&self, id: i64) -> Result<MovieDetail>;

    /// Dispatch a list request to `search` or `discover`
    async fn fetch_list(&self, request: &ListRequest) -> Result<Page<MovieSummary>> {
        match request {
            ListRequest::Search { query, page } => self.search(query, *page).await,
            ListRequest::Discover { page } => self.discover(*page).await,
        }
    }
}
