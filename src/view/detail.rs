use crate::catalog::{CatalogClient, CatalogError, FailureKind};
use crate::model::MovieDetail;
use tracing::{debug, warn};

/// Message shown when a detail fetch fails
pub const DETAIL_ERROR_MESSAGE: &str = "Error fetching movie details. Please try again later.";

/// Message shown when the catalog rejects a detail request without a reason
pub const DETAIL_REJECTED_MESSAGE: &str = "Failed to fetch movie details";

/// Renderable state of the detail view
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Error(String),
    NotFound,
    Loaded(Box<MovieDetail>),
}

/// Handle for one issued detail fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTicket {
    generation: u64,
    movie_id: i64,
}

impl DetailTicket {
    #[must_use]
    pub const fn movie_id(&self) -> i64 {
        self.movie_id
    }
}

/// State for the single-movie view
///
/// Each navigation issues a new ticket; results for older tickets are
/// ignored.
#[derive(Debug, Clone)]
pub struct DetailViewModel {
    generation: u64,
    movie_id: Option<i64>,
    state: DetailState,
}

impl Default for DetailViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailViewModel {
    pub const fn new() -> Self {
        Self {
            generation: 0,
            movie_id: None,
            state: DetailState::Loading,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &DetailState {
        &self.state
    }

    #[must_use]
    pub const fn movie_id(&self) -> Option<i64> {
        self.movie_id
    }

    /// Navigate to `movie_id`
    pub fn enter(&mut self, movie_id: i64) -> DetailTicket {
        self.generation += 1;
        self.movie_id = Some(movie_id);
        self.state = DetailState::Loading;

        DetailTicket {
            generation: self.generation,
            movie_id,
        }
    }

    /// Apply a fetch result; returns false for a superseded ticket
    pub fn complete(
        &mut self,
        ticket: DetailTicket,
        result: Result<MovieDetail, CatalogError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(movie_id = ticket.movie_id, "Discarding stale detail response");
            return false;
        }

        self.state = DetailOutcome::from_result(ticket.movie_id, result).into();
        true
    }

    /// Enter `movie_id` and fetch it from `catalog`
    ///
    /// The exclusive borrow spans the fetch, so no newer navigation can
    /// supersede it and the outcome always becomes the current state.
    pub async fn load(&mut self, catalog: &dyn CatalogClient, movie_id: i64) -> DetailOutcome {
        self.enter(movie_id);
        let outcome = DetailOutcome::from_result(movie_id, catalog.fetch_detail(movie_id).await);
        self.state = outcome.clone().into();
        outcome
    }
}

/// How a detail fetch ended
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    Loaded(Box<MovieDetail>),
    NotFound,
    Error(String),
}

impl DetailOutcome {
    fn from_result(movie_id: i64, result: Result<MovieDetail, CatalogError>) -> Self {
        match result {
            Ok(movie) => Self::Loaded(Box::new(movie)),
            Err(e) if e.kind() == FailureKind::NotFound => Self::NotFound,
            Err(e) => {
                warn!(movie_id, "Error fetching movie details: {}", e);
                let message = match e {
                    CatalogError::Rejected(_) => e
                        .rejection_message()
                        .unwrap_or(DETAIL_REJECTED_MESSAGE)
                        .to_string(),
                    _ => DETAIL_ERROR_MESSAGE.to_string(),
                };
                Self::Error(message)
            }
        }
    }
}

impl From<DetailOutcome> for DetailState {
    fn from(outcome: DetailOutcome) -> Self {
        match outcome {
            DetailOutcome::Loaded(movie) => Self::Loaded(movie),
            DetailOutcome::NotFound => Self::NotFound,
            DetailOutcome::Error(message) => Self::Error(message),
        }
    }
}
