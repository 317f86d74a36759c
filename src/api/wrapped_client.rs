use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use tracing::error;

use crate::models::wrapped::WrappedEntry;

#[derive(Debug, thiserror::Error)]
pub enum WrappedClientError {
    #[error("Http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Api error: {0} - {1}")]
    Api(StatusCode, String),
}

/// Thin client for the wrapped-history endpoint. Holds only the base URL;
/// the `reqwest::Client` is shared and passed in per call.
#[derive(Debug, Clone)]
pub struct WrappedClient {
    base_url: String,
}

impl WrappedClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url }
    }

    /// GET `{base_url}spotify/wrapped-history/` with a bearer token. Any
    /// non-2xx response is logged and returned as an `Api` error; there is
    /// no retry or backoff.
    pub async fn fetch_wrapped_history(
        &self,
        client: &Client,
        access_token: &str,
    ) -> Result<Vec<WrappedEntry>, WrappedClientError> {
        let url = format!("{}spotify/wrapped-history/", self.base_url);
        let response = client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {access_token}"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or("No response body".into());
            error!("Wrapped history request failed: {} - {}", status, body);
            return Err(WrappedClientError::Api(status, body));
        }

        Ok(response.json().await?)
    }
}
