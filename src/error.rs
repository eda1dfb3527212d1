use crate::{analytics::AnalyticsError, catalog::CatalogError};

/// Crate-level result type
pub type Result<T> = std::result::Result<T, MarqueeError>;

/// Startup and wiring errors
///
/// View-models never surface these; they cover building the application.
#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),
}
