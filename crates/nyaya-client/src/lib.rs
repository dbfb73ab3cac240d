//! # nyaya-client
//!
//! HTTP client for the Nyaya legal-information backend.
//!
//! One module per backend endpoint:
//! - `POST /api/chat` (chat assistant)
//! - `POST /api/consultation` (lawyer consultation request)
//! - `GET /api/supreme-court/search` (semantic judgment search)
//! - `GET /api/crime/summary` and `GET /api/women/dashboard` (dashboards)
//! - `GET /api/health` and the IPC section lookup
//!
//! Every request runs under the configured timeout; exceeding it yields
//! [`ClientError::Timeout`] rather than a generic transport error.

pub mod chat;
pub mod consultation;
pub mod crime;
pub mod ipc;
pub mod judgments;

mod error;
mod http;

pub use error::ClientError;

use std::time::Duration;

use nyaya_config::ApiConfig;

/// HTTP client bound to one backend origin.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    origin: String,
    timeout: Duration,
}

impl ApiClient {
    /// Build a client from API settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the settings fail validation and
    /// [`ClientError::Transport`] if the underlying `reqwest::Client` cannot
    /// be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        config
            .validate()
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            origin: config.origin().to_string(),
            timeout: config.timeout(),
        })
    }

    /// Backend origin this client talks to.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.origin)
    }

    /// Send a request, separating timeouts from other transport failures.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ClientError> {
        request.send().await.map_err(|e| self.classify(e))
    }

    /// Read the full response body under the same timeout classification.
    async fn body(&self, resp: reqwest::Response) -> Result<Vec<u8>, ClientError> {
        resp.bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|e| self.classify(e))
    }

    fn classify(&self, error: reqwest::Error) -> ClientError {
        if error.is_timeout() {
            ClientError::Timeout {
                secs: self.timeout.as_secs(),
            }
        } else {
            ClientError::Transport(error)
        }
    }
}
