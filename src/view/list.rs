use crate::catalog::{CatalogError, ImageUrls, ListRequest, Page};
use crate::model::MovieSummary;
use crate::view::MovieCard;
use serde::Serialize;
use tracing::debug;

/// Message shown when a list fetch fails
pub const LIST_ERROR_MESSAGE: &str = "Error fetching movies. Please try again later.";

/// Message shown when the catalog rejects a list request without a reason
pub const LIST_REJECTED_MESSAGE: &str = "Failed to fetch movies";

/// Handle for one issued list fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    request: ListRequest,
}

impl FetchTicket {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn request(&self) -> &ListRequest {
        &self.request
    }
}

/// A successful non-empty search, ready to be counted
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub term: String,
    pub movie: MovieSummary,
}

/// What happened to a completed fetch
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    /// The response was rendered; `hit` is set for non-empty searches with results
    Applied { hit: Option<SearchHit> },
    /// A newer fetch was issued since; the response was dropped
    Stale,
}

/// Fetched page of movies plus loading, error, and pagination state
#[derive(Debug, Clone)]
pub struct ResultList {
    items: Vec<MovieSummary>,
    is_loading: bool,
    error: Option<String>,
    page: u32,
    total_pages: u32,
    total_results: u64,
    page_size: u32,
    generation: u64,
    has_loaded: bool,
}

impl ResultList {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            error: None,
            page: 1,
            total_pages: 0,
            total_results: 0,
            page_size: page_size.max(1),
            generation: 0,
            has_loaded: false,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[MovieSummary] {
        &self.items
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub const fn total_results(&self) -> u64 {
        self.total_results
    }

    /// Generation of the most recently issued fetch
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Advance one page; returns false (and changes nothing) on the last page
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Go back one page; returns false (and changes nothing) on the first page
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Return to the first page, as when the settled query changes
    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Request for `query` at the current page
    #[must_use]
    pub fn request_for(&self, query: &str) -> ListRequest {
        ListRequest::for_query(query, self.page)
    }

    /// Mark a fetch as started, superseding any in flight
    pub fn begin(&mut self, request: ListRequest) -> FetchTicket {
        self.generation += 1;
        self.is_loading = true;
        self.error = None;

        FetchTicket {
            generation: self.generation,
            request,
        }
    }

    /// Apply a fetch result if it belongs to the latest issued fetch
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Page<MovieSummary>, CatalogError>,
    ) -> ListOutcome {
        if ticket.generation != self.generation {
            debug!(
                generation = ticket.generation,
                latest = self.generation,
                "Discarding stale list response"
            );
            return ListOutcome::Stale;
        }

        self.is_loading = false;
        self.has_loaded = true;

        match result {
            Ok(page) => {
                self.items = page.results;
                self.total_pages = page.total_pages;
                self.total_results = page.total_results;

                let hit = ticket.request.search_term().and_then(|term| {
                    self.items.first().map(|movie| SearchHit {
                        term: term.to_string(),
                        movie: movie.clone(),
                    })
                });

                ListOutcome::Applied { hit }
            }
            Err(e) => {
                debug!(generation = ticket.generation, "List fetch failed: {}", e);
                self.items.clear();
                self.error = Some(list_error_message(&e));
                ListOutcome::Applied { hit: None }
            }
        }
    }

    /// A fetch completed successfully with nothing to show
    #[must_use]
    pub fn is_no_results(&self) -> bool {
        self.has_loaded && !self.is_loading && self.error.is_none() && self.items.is_empty()
    }

    /// Pagination controls are only shown for multi-page results
    #[must_use]
    pub const fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }

    #[must_use]
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    /// "Showing X - Y of Z movies", absent when there are no results
    #[must_use]
    pub fn results_label(&self) -> Option<String> {
        if self.total_results == 0 {
            return None;
        }

        let page_size = u64::from(self.page_size);
        let page = u64::from(self.page);
        let first = (page - 1) * page_size + 1;
        let last = (page * page_size).min(self.total_results);

        Some(format!(
            "Showing {first} - {last} of {} movies",
            group_thousands(self.total_results)
        ))
    }

    #[must_use]
    pub fn snapshot(&self, images: &ImageUrls) -> ListSnapshot {
        ListSnapshot {
            items: self
                .items
                .iter()
                .map(|movie| MovieCard::from_summary(movie, images))
                .collect(),
            is_loading: self.is_loading,
            error: self.error.clone(),
            no_results: self.is_no_results(),
            page: self.page,
            total_pages: self.total_pages,
            total_results: self.total_results,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
            show_pagination: self.show_pagination(),
            page_label: self.page_label(),
            results_label: self.results_label(),
        }
    }
}

/// Renderable copy of [`ResultList`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListSnapshot {
    pub items: Vec<MovieCard>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub no_results: bool,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u64,
    pub has_next: bool,
    pub has_previous: bool,
    pub show_pagination: bool,
    pub page_label: String,
    pub results_label: Option<String>,
}

fn list_error_message(error: &CatalogError) -> String {
    match error {
        CatalogError::Rejected(_) => error
            .rejection_message()
            .unwrap_or(LIST_REJECTED_MESSAGE)
            .to_string(),
        _ => LIST_ERROR_MESSAGE.to_string(),
    }
}

/// Format with comma thousands separators
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
