//! Backend health and IPC section lookup.

use nyaya_core::entities::{BackendHealth, IpcExplanation, IpcSection};
use serde_json::{Value, json};

use crate::{
    ApiClient,
    error::ClientError,
    http::{check_response, decode, decode_rows},
};

const ERROR_FIELDS: &[&str] = &["error", "message"];

impl ApiClient {
    /// Backend liveness and dataset sizes.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend is unreachable, times out, or
    /// answers with a non-success status.
    pub async fn health(&self) -> Result<BackendHealth, ClientError> {
        let url = self.endpoint("/api/health");
        let resp = self.send(self.http.get(&url)).await?;
        let resp = check_response(resp, ERROR_FIELDS, "Health check failed").await?;
        decode(&self.body(resp).await?)
    }

    /// IPC sections whose number, title, or text contains `query`. The
    /// backend caps the list at five and returns nothing for an empty query.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body is not a
    /// JSON array.
    pub async fn ipc_sections(&self, query: &str) -> Result<Vec<IpcSection>, ClientError> {
        let url = format!(
            "{}?q={}",
            self.endpoint("/api/ipc/assistant/search"),
            urlencoding::encode(query)
        );
        let resp = self.send(self.http.get(&url)).await?;
        let resp = check_response(resp, ERROR_FIELDS, "Section search failed").await?;

        let rows: Option<Vec<Value>> = decode(&self.body(resp).await?)?;
        Ok(decode_rows(rows.unwrap_or_default(), "ipc/assistant/search"))
    }

    /// Explanation of one IPC section by its number (e.g. `"302"`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 when the section does not
    /// exist, or another [`ClientError`] on transport failure.
    pub async fn explain_ipc_section(&self, section: &str) -> Result<IpcExplanation, ClientError> {
        let url = self.endpoint("/api/ipc/assistant/explain");
        let body = json!({ "section": section.trim() });
        let resp = self.send(self.http.post(&url).json(&body)).await?;
        let resp = check_response(resp, ERROR_FIELDS, "Section not found").await?;
        decode(&self.body(resp).await?)
    }
}
