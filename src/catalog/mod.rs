mod api_types;
mod cache;
mod client;
mod http;
mod image;
mod tmdb;


pub use cache::{CacheConfig, CachedCatalog};
pub use client::{CatalogClient, ListRequest, Page};
pub use http::HttpClient;
pub use image::ImageUrls;
pub use tmdb::TmdbCatalog;

/// Catalog result type
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog error types
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Catalog rejected request: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// The two failure kinds a view can observe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    FetchFailed,
    NotFound,
}

impl CatalogError {
    /// Collapse transport, status, and decode failures into `FetchFailed`
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::NotFound(_) => FailureKind::NotFound,
            _ => FailureKind::FetchFailed,
        }
    }

    /// Message supplied by the catalog alongside an explicit rejection
    #[must_use]
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            Self::Rejected(message) => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }
}
