use crate::catalog::{CatalogError, Result};
use reqwest::{Client, StatusCode, header};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Authenticated JSON client for the catalog service
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpClient {
    /// Create a new HTTP client sending `token` as a bearer credential
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("Marquee/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Build full URL from endpoint
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Execute an authenticated GET request with query parameters
    pub async fn get_with_params<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.url(endpoint);
        let response = self
            .client
            .get(&url)
            .query(params)
            .header(header::ACCEPT, "application/json")
            .bearer_auth(&self.token)
            .send()
            .await?;

        Self::handle_response(endpoint, response).await
    }

    /// Check status, then decode the body as JSON
    ///
    /// A body carrying `"response": "False"` is treated as a rejection even
    /// when the status is a success.
    async fn handle_response<T: DeserializeOwned>(
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(endpoint.to_string()));
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();

            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(format!("JSON parse error: {e}")))?;

        if body.get("response").and_then(serde_json::Value::as_str) == Some("False") {
            let message = body
                .get("Error")
                .and_then(serde_json::Value::as_str)
                .map(ToString::to_string);
            return Err(CatalogError::Rejected(message));
        }

        serde_json::from_value(body)
            .map_err(|e| CatalogError::Parse(format!("Unexpected response shape: {e}")))
    }
}
