use axum::Router;

use crate::Ctx;

pub mod health;
pub mod home;
pub mod movie;
pub mod trending;

/// Mount all API routes
pub fn mount() -> Router<Ctx> {
    Router::new()
        .merge(health::mount())
        .merge(home::mount())
        .merge(movie::mount())
        .merge(trending::mount())
}
