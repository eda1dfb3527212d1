use axum::{Json, Router, routing::get};

use crate::{ApiResponse, Ctx};

/// Liveness probe
/// GET /api/health
async fn health() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::ok("Healthy", env!("CARGO_PKG_VERSION")))
}

/// Mount health routes
pub fn mount() -> Router<Ctx> {
    Router::new().route("/health", get(health))
}
