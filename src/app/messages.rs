use crate::catalog::{Page, Result};
use crate::model::{MovieSummary, TrendRecord};
use crate::view::FetchTicket;

/// Events accepted by the home controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeCommand {
    /// The search box now reads this text
    Input(String),
    NextPage,
    PreviousPage,
    /// Reload the trending section
    RefreshTrending,
}

/// Background work reporting back to the controller
#[derive(Debug)]
pub(crate) enum Completion {
    /// A list fetch finished, successfully or not
    List {
        ticket: FetchTicket,
        result: Result<Page<MovieSummary>>,
    },
    /// A trending load finished; failures arrive as an empty list
    Trending { generation: u64, records: Vec<TrendRecord> },
}

/// The controller task has stopped
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("home controller is no longer running")]
pub struct HomeClosed;
