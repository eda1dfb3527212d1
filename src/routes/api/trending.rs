use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{ApiRejection, ApiResponse, ApiResult, Ctx, view::TrendingCard};

/// Query parameters for the trending list
#[derive(Debug, Deserialize, Validate)]
pub struct TrendingQuery {
    /// Maximum number of entries (default: configured trending limit)
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct TrendingResponse {
    pub results: Vec<TrendingCard>,
    pub total: usize,
}

/// Most searched terms
/// GET /api/trending?limit=...
async fn get_trending(
    State(ctx): State<Ctx>,
    WithRejection(Query(params), _): WithRejection<Query<TrendingQuery>, ApiRejection>,
) -> ApiResult<TrendingResponse> {
    params
        .validate()
        .map_err(|e| ApiResponse::error(StatusCode::BAD_REQUEST, format!("Invalid query: {e}")))?;

    let limit = params.limit.unwrap_or(ctx.trending_limit);
    let records = ctx.analytics.list_trending(limit).await;
    let results = TrendingCard::ranked(&records);
    let total = results.len();

    Ok(Json(ApiResponse::ok(
        "Trending searches",
        TrendingResponse { results, total },
    )))
}

/// Mount trending routes
pub fn mount() -> Router<Ctx> {
    Router::new().route("/trending", get(get_trending))
}
