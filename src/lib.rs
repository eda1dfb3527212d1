pub mod analytics;
pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod routes;
pub mod search;
pub mod view;

#[cfg(test)]
mod testing;

use analytics::Analytics;
use app::HomeHandle;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog::{CatalogClient, ImageUrls};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for request handlers
#[derive(Clone)]
pub struct Ctx {
    pub home: HomeHandle,
    pub catalog: Arc<dyn CatalogClient>,
    pub analytics: Analytics,
    pub images: ImageUrls,
    pub trending_limit: u32,
}

/// Response envelope for every route
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            code: 200,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
        (
            status,
            Json(Self {
                code: status.as_u16(),
                message: message.into(),
                data: None,
            }),
        )
    }
}

/// Error half of a handler result
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// Handler result
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Extractor failure rendered in the response envelope
#[derive(Debug)]
pub struct ApiRejection(ApiError);

impl IntoResponse for ApiRejection {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

macro_rules! envelope_rejection {
    ($($rejection:ty),*) => {
        $(
            impl From<$rejection> for ApiRejection {
                fn from(rejection: $rejection) -> Self {
                    Self(ApiResponse::error(rejection.status(), rejection.body_text()))
                }
            }
        )*
    };
}

envelope_rejection!(JsonRejection, PathRejection, QueryRejection);
