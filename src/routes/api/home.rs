use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use crate::{
    ApiError, ApiRejection, ApiResponse, ApiResult, Ctx,
    app::{HomeClosed, HomeCommand, HomeSnapshot},
};

/// Search box input
#[derive(Debug, Deserialize)]
pub struct QueryInput {
    /// Full text of the search box
    pub query: String,
}

// ============ Handlers ============

/// Current home view state
/// GET /api/home
async fn get_home(State(ctx): State<Ctx>) -> ApiResult<HomeSnapshot> {
    Ok(Json(ApiResponse::ok("Home state", ctx.home.snapshot())))
}

/// Search box changed
/// POST /api/home/query
async fn set_query(
    State(ctx): State<Ctx>,
    WithRejection(Json(input), _): WithRejection<Json<QueryInput>, ApiRejection>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    send(&ctx, HomeCommand::Input(input.query)).await
}

/// POST /api/home/next
async fn next_page(State(ctx): State<Ctx>) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    send(&ctx, HomeCommand::NextPage).await
}

/// POST /api/home/previous
async fn previous_page(
    State(ctx): State<Ctx>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    send(&ctx, HomeCommand::PreviousPage).await
}

/// POST /api/home/trending/refresh
async fn refresh_trending(
    State(ctx): State<Ctx>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    send(&ctx, HomeCommand::RefreshTrending).await
}

// ============ Helpers ============

/// Forward a command; it is applied asynchronously
async fn send(
    ctx: &Ctx,
    command: HomeCommand,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    ctx.home.send(command).await.map_err(|e: HomeClosed| {
        ApiResponse::error(StatusCode::SERVICE_UNAVAILABLE, e.to_string())
    })?;

    Ok((
        StatusCode::ACCEPTED,
        Json(ApiResponse {
            code: 202,
            message: "Accepted".to_string(),
            data: None,
        }),
    ))
}

/// Mount home routes
pub fn mount() -> Router<Ctx> {
    Router::new()
        .route("/home", get(get_home))
        .route("/home/query", post(set_query))
        .route("/home/next", post(next_page))
        .route("/home/previous", post(previous_page))
        .route("/home/trending/refresh", post(refresh_trending))
}
