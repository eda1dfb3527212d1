//! Home view controller.
//!
//! A single task owns the query state, the result list, and the trending
//! section, and handles one event at a time: commands from callers, the
//! debounce deadline, and completed background work. List fetches and
//! trending loads run as separate tasks and report back tagged with the
//! generation they were issued under; only the latest generation is applied.

use super::messages::{Completion, HomeClosed, HomeCommand};
use crate::analytics::Analytics;
use crate::catalog::{CatalogClient, ImageUrls};
use crate::config::AppConfig;
use crate::model::TrendRecord;
use crate::search::QueryState;
use crate::view::{ListOutcome, ListSnapshot, ResultList, SearchHit, TrendingCard};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

const COMMAND_BUFFER: usize = 64;

/// Tunables for the home view
#[derive(Debug, Clone)]
pub struct HomeSettings {
    pub debounce: Duration,
    pub page_size: u32,
    pub trending_limit: u32,
}

impl HomeSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            debounce: config.search.debounce(),
            page_size: config.search.page_size,
            trending_limit: config.analytics.trending_limit,
        }
    }
}

/// Renderable state of the home view
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HomeSnapshot {
    /// Text currently in the search box
    pub raw_query: String,
    /// Query the list reflects
    pub settled_query: String,
    pub list: ListSnapshot,
    pub trending: Vec<TrendingCard>,
}

/// Cloneable access to a running home controller
#[derive(Clone)]
pub struct HomeHandle {
    commands: mpsc::Sender<HomeCommand>,
    snapshots: watch::Receiver<HomeSnapshot>,
}

impl HomeHandle {
    pub async fn send(&self, command: HomeCommand) -> Result<(), HomeClosed> {
        self.commands.send(command).await.map_err(|_| HomeClosed)
    }

    pub async fn input(&self, query: impl Into<String>) -> Result<(), HomeClosed> {
        self.send(HomeCommand::Input(query.into())).await
    }

    pub async fn next_page(&self) -> Result<(), HomeClosed> {
        self.send(HomeCommand::NextPage).await
    }

    pub async fn previous_page(&self) -> Result<(), HomeClosed> {
        self.send(HomeCommand::PreviousPage).await
    }

    pub async fn refresh_trending(&self) -> Result<(), HomeClosed> {
        self.send(HomeCommand::RefreshTrending).await
    }

    /// Latest published state
    #[must_use]
    pub fn snapshot(&self) -> HomeSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Wait until a published state satisfies `predicate`
    pub async fn wait_for(
        &self,
        predicate: impl FnMut(&HomeSnapshot) -> bool,
    ) -> Result<HomeSnapshot, HomeClosed> {
        let mut snapshots = self.snapshots.clone();
        snapshots
            .wait_for(predicate)
            .await
            .map(|snapshot| snapshot.clone())
            .map_err(|_| HomeClosed)
    }
}

/// Event loop behind [`HomeHandle`]
pub struct HomeController {
    catalog: Arc<dyn CatalogClient>,
    analytics: Analytics,
    images: ImageUrls,
    trending_limit: u32,
    query: QueryState,
    list: ResultList,
    trending: Vec<TrendRecord>,
    trending_generation: u64,
    commands: mpsc::Receiver<HomeCommand>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    snapshots: watch::Sender<HomeSnapshot>,
}

impl HomeController {
    /// Start the controller on the current runtime
    ///
    /// The task ends once every [`HomeHandle`] has been dropped.
    pub fn spawn(
        catalog: Arc<dyn CatalogClient>,
        analytics: Analytics,
        images: ImageUrls,
        settings: &HomeSettings,
    ) -> (HomeHandle, JoinHandle<()>) {
        let (commands_tx, commands_rx) = mpsc::channel(COMMAND_BUFFER);
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        let (snapshots_tx, snapshots_rx) = watch::channel(HomeSnapshot::default());

        let controller = Self {
            catalog,
            analytics,
            images,
            trending_limit: settings.trending_limit,
            query: QueryState::new(settings.debounce),
            list: ResultList::new(settings.page_size),
            trending: Vec::new(),
            trending_generation: 0,
            commands: commands_rx,
            completions_tx,
            completions_rx,
            snapshots: snapshots_tx,
        };

        let task = tokio::spawn(controller.run());
        let handle = HomeHandle {
            commands: commands_tx,
            snapshots: snapshots_rx,
        };

        (handle, task)
    }

    async fn run(mut self) {
        // The settled query starts empty, so the first fetch is a discover
        self.dispatch();
        self.load_trending();

        loop {
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },
                settled = self.query.next_settled() => {
                    info!(query = %settled, "Search query settled");
                    self.list.reset_page();
                    self.dispatch();
                }
                Some(done) = self.completions_rx.recv() => self.on_completion(done),
            }
        }

        debug!("Home controller stopped");
    }

    fn handle(&mut self, command: HomeCommand) {
        match command {
            HomeCommand::Input(query) => {
                self.query.input(query);
                self.publish();
            }
            HomeCommand::NextPage => {
                if self.list.next_page() {
                    self.dispatch();
                }
            }
            HomeCommand::PreviousPage => {
                if self.list.previous_page() {
                    self.dispatch();
                }
            }
            HomeCommand::RefreshTrending => self.load_trending(),
        }
    }

    /// Issue a list fetch for the settled query at the current page
    fn dispatch(&mut self) {
        let request = self.list.request_for(self.query.settled());
        let ticket = self.list.begin(request);

        info!(
            generation = ticket.generation(),
            page = ticket.request().page(),
            query = ticket.request().search_term().unwrap_or_default(),
            "Fetching movies"
        );

        let catalog = Arc::clone(&self.catalog);
        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = catalog.fetch_list(ticket.request()).await;
            // The receiver only goes away when the controller stops
            let _ = completions.send(Completion::List { ticket, result });
        });

        self.publish();
    }

    fn on_completion(&mut self, done: Completion) {
        match done {
            Completion::List { ticket, result } => match self.list.complete(&ticket, result) {
                ListOutcome::Applied { hit } => {
                    if let Some(hit) = hit {
                        self.record_search(hit);
                    }
                    self.publish();
                }
                ListOutcome::Stale => {}
            },
            Completion::Trending {
                generation,
                records,
            } => {
                if generation != self.trending_generation {
                    debug!(generation, "Discarding stale trending load");
                    return;
                }
                debug!(count = records.len(), "Loaded trending searches");
                self.trending = records;
                self.publish();
            }
        }
    }

    /// Count the search in the background; never touches list state
    fn record_search(&self, hit: SearchHit) {
        let analytics = self.analytics.clone();
        tokio::spawn(async move {
            analytics.record_search(&hit.term, &hit.movie).await;
        });
    }

    /// Reload trending in the background; the list never waits on it
    fn load_trending(&mut self) {
        self.trending_generation += 1;
        let generation = self.trending_generation;
        let analytics = self.analytics.clone();
        let limit = self.trending_limit;
        let completions = self.completions_tx.clone();

        tokio::spawn(async move {
            let records = analytics.list_trending(limit).await;
            let _ = completions.send(Completion::Trending {
                generation,
                records,
            });
        });
    }

    fn snapshot(&self) -> HomeSnapshot {
        HomeSnapshot {
            raw_query: self.query.raw().to_string(),
            settled_query: self.query.settled().to_string(),
            list: self.list.snapshot(&self.images),
            trending: TrendingCard::ranked(&self.trending),
        }
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.snapshot());
    }
}
