use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use axum_extra::extract::WithRejection;

use crate::{
    ApiRejection, ApiResponse, ApiResult, Ctx,
    view::{DetailOutcome, DetailView, DetailViewModel},
};

/// Movie detail
/// GET /api/movie/{id}
async fn get_movie(
    State(ctx): State<Ctx>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiRejection>,
) -> ApiResult<DetailView> {
    let mut detail = DetailViewModel::new();

    match detail.load(ctx.catalog.as_ref(), id).await {
        DetailOutcome::Loaded(movie) => Ok(Json(ApiResponse::ok(
            "Movie retrieved",
            DetailView::from_detail(&movie, &ctx.images),
        ))),
        DetailOutcome::NotFound => Err(ApiResponse::error(
            StatusCode::NOT_FOUND,
            "Movie not found",
        )),
        DetailOutcome::Error(message) => Err(ApiResponse::error(StatusCode::BAD_GATEWAY, message)),
    }
}

/// Mount movie routes
pub fn mount() -> Router<Ctx> {
    Router::new().route("/movie/{id}", get(get_movie))
}
