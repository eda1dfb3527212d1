//! In-process catalog used by controller and route tests.

use crate::catalog::{CatalogClient, CatalogError, ListRequest, Page, Result};
use crate::model::{MovieDetail, MovieSummary};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::time::Duration;

pub struct FakeCatalog {
    requests: Mutex<Vec<ListRequest>>,
    detail_requests: Mutex<Vec<i64>>,
    total_pages: u32,
    per_page: i64,
    empty_queries: Vec<String>,
    failing_queries: Vec<String>,
    delays: Vec<(ListRequest, Duration)>,
    details: Vec<MovieDetail>,
    failing_details: Vec<i64>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            detail_requests: Mutex::new(Vec::new()),
            total_pages: 5,
            per_page: 3,
            empty_queries: Vec::new(),
            failing_queries: Vec::new(),
            delays: Vec::new(),
            details: Vec::new(),
            failing_details: Vec::new(),
        }
    }

    pub fn with_total_pages(mut self, total_pages: u32) -> Self {
        self.total_pages = total_pages;
        self
    }

    pub fn with_empty_query(mut self, query: &str) -> Self {
        self.empty_queries.push(query.to_string());
        self
    }

    pub fn with_failing_query(mut self, query: &str) -> Self {
        self.failing_queries.push(query.to_string());
        self
    }

    pub fn with_delay(mut self, request: ListRequest, delay: Duration) -> Self {
        self.delays.push((request, delay));
        self
    }

    pub fn with_detail(mut self, detail: MovieDetail) -> Self {
        self.details.push(detail);
        self
    }

    pub fn with_failing_detail(mut self, id: i64) -> Self {
        self.failing_details.push(id);
        self
    }

    /// List requests in the order they were issued
    pub fn requests(&self) -> Vec<ListRequest> {
        self.requests.lock().clone()
    }

    pub fn detail_requests(&self) -> Vec<i64> {
        self.detail_requests.lock().clone()
    }

    async fn respond(&self, request: ListRequest, label: &str) -> Result<Page<MovieSummary>> {
        self.requests.lock().push(request.clone());

        let delay = self
            .delays
            .iter()
            .find(|(r, _)| *r == request)
            .map(|(_, d)| *d);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let term = request.search_term().unwrap_or_default().to_string();
        if self.failing_queries.contains(&term) {
            return Err(CatalogError::Api {
                status: 500,
                message: "internal error".to_string(),
            });
        }
        if self.empty_queries.contains(&term) {
            return Ok(Page::empty(request.page()));
        }

        let page = request.page();
        let results = (0..self.per_page)
            .map(|i| {
                MovieSummary::new(i64::from(page) * 100 + i, format!("{label} {page}.{i}"))
                    .with_language("en")
            })
            .collect();

        Ok(Page {
            results,
            page,
            total_pages: self.total_pages,
            total_results: u64::from(self.total_pages) * 20,
        })
    }
}

#[async_trait]
impl CatalogClient for FakeCatalog {
    async fn search(&self, query: &str, page: u32) -> Result<Page<MovieSummary>> {
        let request = ListRequest::Search {
            query: query.to_string(),
            page,
        };
        self.respond(request, query).await
    }

    async fn discover(&self, page: u32) -> Result<Page<MovieSummary>> {
        self.respond(ListRequest::Discover { page }, "Popular").await
    }

    async fn fetch_detail(&self, id: i64) -> Result<MovieDetail> {
        self.detail_requests.lock().push(id);
        if self.failing_details.contains(&id) {
            return Err(CatalogError::Api {
                status: 500,
                message: "internal error".to_string(),
            });
        }
        self.details
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("/movie/{id}")))
    }
}
