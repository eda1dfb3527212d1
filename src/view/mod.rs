//! View-models for the list and detail views and their display projections.

mod card;
mod detail;
mod list;

pub use card::{CastCard, DetailView, MovieCard, TrendingCard, detail_route};
pub use detail::{
    DETAIL_ERROR_MESSAGE, DETAIL_REJECTED_MESSAGE, DetailOutcome, DetailState, DetailTicket,
    DetailViewModel,
};
pub use list::{
    FetchTicket, LIST_ERROR_MESSAGE, LIST_REJECTED_MESSAGE, ListOutcome, ListSnapshot,
    ResultList, SearchHit,
};
