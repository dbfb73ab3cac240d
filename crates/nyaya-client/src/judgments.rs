//! Supreme Court judgment search endpoint.

use nyaya_core::entities::SearchEnvelope;

use crate::{
    ApiClient,
    error::ClientError,
    http::{check_response, decode},
};

const ERROR_FIELDS: &[&str] = &["message"];
const FALLBACK_ERROR: &str = "Search failed";

impl ApiClient {
    /// Run a semantic search for `question`. Result order is the backend's
    /// ranking and is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or times out, the backend
    /// returns a non-success status, or the envelope cannot be parsed.
    pub async fn search_judgments(&self, question: &str) -> Result<SearchEnvelope, ClientError> {
        let url = format!(
            "{}?q={}",
            self.endpoint("/api/supreme-court/search"),
            urlencoding::encode(question)
        );

        let resp = self.send(self.http.get(&url)).await?;
        let resp = check_response(resp, ERROR_FIELDS, FALLBACK_ERROR).await?;
        let envelope: SearchEnvelope = decode(&self.body(resp).await?)?;

        if envelope.total_results != Some(envelope.results.len() as u64) {
            tracing::debug!(
                reported = ?envelope.total_results,
                received = envelope.results.len(),
                "search total does not match result count"
            );
        }
        Ok(envelope)
    }
}
