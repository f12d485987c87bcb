//! Scoreboard HTTP client implementation.

use reqwest::{Client, StatusCode};
use std::time::Duration;

use scoreboard_core::{ScoreRecord, ScoreSubmission};

use crate::error::ClientError;
use crate::types::{ApiErrorResponse, HealthResponse};

/// Scoreboard API client.
#[derive(Debug, Clone)]
pub struct ScoreboardClient {
    client: Client,
    base_url: String,
}

impl ScoreboardClient {
    /// Create a new scoreboard client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the scoreboard service (e.g., `"http://localhost:4000"`)
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new scoreboard client with custom options.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if the HTTP client cannot be built.
    pub fn with_options(
        base_url: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// List every stored score.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_scores(&self) -> Result<Vec<ScoreRecord>, ClientError> {
        let url = format!("{}/scores", self.base_url);

        let response = self.client.get(&url).send().await?;

        Self::handle_response(response).await
    }

    /// Submit a score.
    ///
    /// This is a convenience wrapper around [`ScoreboardClient::submit`].
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` if the server rejects the submission,
    /// or another error if the request fails.
    pub async fn submit_score(
        &self,
        name: impl Into<String>,
        score: f64,
    ) -> Result<ScoreRecord, ClientError> {
        self.submit(&ScoreSubmission::new(name, score)).await
    }

    /// Submit a score, optionally with a client-side creation time.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` if the server rejects the submission,
    /// or another error if the request fails.
    pub async fn submit(&self, submission: &ScoreSubmission) -> Result<ScoreRecord, ClientError> {
        let url = format!("{}/scores", self.base_url);

        let response = self.client.post(&url).json(submission).send().await?;

        Self::handle_response(response).await
    }

    /// Check service health.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/health", self.base_url);

        let response = self.client.get(&url).send().await?;

        Self::handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            return Ok(serde_json::from_slice(&body)?);
        }

        // Listing failures come back as plain text, everything else as JSON.
        let text = response.text().await?;
        let message = serde_json::from_str::<ApiErrorResponse>(&text)
            .map_or_else(|_| text.clone(), |body| body.error);

        tracing::debug!(status = %status, message = %message, "Scoreboard API error");

        if status == StatusCode::BAD_REQUEST {
            return Err(ClientError::Validation(message));
        }

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}
