//! HTTP client for the sermon API, the events feed, and the form service.

pub mod contact;
pub mod events;
pub mod sermons;

use crate::config::Config;
use crate::error::{ClientError, Result};

/// HTTP client for the site's third-party data sources.
#[derive(Debug, Clone)]
pub struct GraceClient {
    client: reqwest::Client,
    config: Config,
}

impl GraceClient {
    /// Create a new client from configuration.
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()?;
        Ok(Self { client, config })
    }

    /// Create from environment.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    /// Get the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches `url` and returns the body of a successful response.
    async fn get_text(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "fetching feed");
        let response = self.client.get(url).send().await?;
        self.handle_text_response(response).await
    }

    /// Handle error responses, returning the body on success.
    async fn handle_text_response(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();
        if status.is_success() {
            response.text().await.map_err(ClientError::from)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
