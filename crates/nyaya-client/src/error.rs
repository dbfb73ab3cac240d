//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connection refused, reset, TLS, ...).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {secs}s")]
    Timeout {
        /// Configured timeout in seconds.
        secs: u64,
    },

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Message from the response body, or the endpoint's fallback text.
        message: String,
    },

    /// Failed to parse a backend response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The configured backend URL is unusable.
    #[error("invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Text a widget shows in place of the missing content.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Timeout { secs } => format!("Request timed out after {secs}s"),
            Self::Transport(error) => error.to_string(),
            Self::Parse(detail) => format!("Malformed response from server: {detail}"),
            Self::InvalidUrl(url) => format!("Invalid backend URL: {url}"),
        }
    }

    /// The backend could not be reached at all.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Transport(error) if error.is_connect())
    }

    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
