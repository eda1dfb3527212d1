mod home;
mod messages;


pub use home::{HomeController, HomeHandle, HomeSettings, HomeSnapshot};
pub use messages::{HomeClosed, HomeCommand};

use crate::Ctx;
use crate::analytics::{Analytics, SqliteStore};
use crate::catalog::{CachedCatalog, CatalogClient, ImageUrls, TmdbCatalog};
use crate::config::AppConfig;
use crate::error::Result;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Wire clients from configuration and start the home controller
pub async fn build(config: &AppConfig) -> Result<(Ctx, JoinHandle<()>)> {
    let images = ImageUrls::from_config(&config.catalog);

    let mut catalog: Arc<dyn CatalogClient> = Arc::new(TmdbCatalog::new(&config.catalog)?);
    if config.cache.enabled {
        info!("Movie detail cache enabled");
        catalog = Arc::new(CachedCatalog::new(catalog, &config.cache.detail_cache()));
    }

    let store = SqliteStore::connect(&config.analytics.database_url).await?;
    let analytics = Analytics::new(Arc::new(store), images.clone());

    Ok(assemble(catalog, analytics, images, config))
}

/// Start the home controller over already-built clients
pub fn assemble(
    catalog: Arc<dyn CatalogClient>,
    analytics: Analytics,
    images: ImageUrls,
    config: &AppConfig,
) -> (Ctx, JoinHandle<()>) {
    let settings = HomeSettings::from_config(config);
    let (home, task) = HomeController::spawn(
        Arc::clone(&catalog),
        analytics.clone(),
        images.clone(),
        &settings,
    );

    let ctx = Ctx {
        home,
        catalog,
        analytics,
        images,
        trending_limit: settings.trending_limit,
    };

    (ctx, task)
}
