use std::time::Duration;

use reqwest::Client;

use super::error::ApiError;
use super::types::StatusResponse;

/// One status fetch against whatever transport backs the job.
///
/// Production uses [`StatusClient`] over HTTP; tests substitute stubs so the
/// polling loop can be driven without a network.
#[allow(async_fn_in_trait)]
pub trait StatusFetcher {
    async fn fetch_status(&self) -> Result<StatusResponse, ApiError>;
}

pub struct StatusClient {
    client: Client,
    base_url: String,
}

impl StatusClient {
    /// Create a client for the status server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Perform a single `GET /status` request.
    pub async fn get_status(&self) -> Result<StatusResponse, ApiError> {
        let response = self
            .client
            .get(format!("{}/status", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.json::<StatusResponse>().await?;
        Ok(body)
    }
}

impl StatusFetcher for StatusClient {
    async fn fetch_status(&self) -> Result<StatusResponse, ApiError> {
        self.get_status().await
    }
}
