//! Chat assistant endpoint.

use nyaya_core::entities::ChatRequest;
use serde_json::Value;

use crate::{
    ApiClient,
    error::ClientError,
    http::{check_response, decode, first_string_field},
};

/// Body fields that may carry the assistant reply, in priority order.
///
/// TODO: drop `text` once the backend settles on `reply` as the only field.
pub const REPLY_FIELDS: &[&str] = &["reply", "text"];

/// Reply shown when the backend succeeds without any reply field.
pub const NO_RESPONSE: &str = "No response";

const ERROR_FIELDS: &[&str] = &["error"];
const FALLBACK_ERROR: &str = "Chat failed";

/// Pull the reply text out of a success body.
#[must_use]
pub fn extract_reply(body: &Value) -> String {
    first_string_field(body, REPLY_FIELDS).unwrap_or_else(|| NO_RESPONSE.to_string())
}

impl ApiClient {
    /// Send one chat message together with the prior transcript.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or times out, the backend
    /// returns a non-success status, or the body is not JSON.
    pub async fn chat(&self, request: &ChatRequest) -> Result<String, ClientError> {
        let url = self.endpoint("/api/chat");
        tracing::debug!(history = request.history.len(), "sending chat message");

        let resp = self.send(self.http.post(&url).json(request)).await?;
        let resp = check_response(resp, ERROR_FIELDS, FALLBACK_ERROR).await?;
        let body: Value = decode(&self.body(resp).await?)?;
        Ok(extract_reply(&body))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reply_takes_priority_over_text() {
        assert_eq!(extract_reply(&json!({"reply": "hi", "text": "ignored"})), "hi");
    }

    #[test]
    fn text_is_used_when_reply_missing() {
        assert_eq!(extract_reply(&json!({"text": "from text"})), "from text");
    }

    #[test]
    fn empty_reply_falls_through_to_text() {
        assert_eq!(extract_reply(&json!({"reply": "", "text": "t"})), "t");
    }

    #[test]
    fn missing_fields_default_to_no_response() {
        assert_eq!(extract_reply(&json!({})), NO_RESPONSE);
        assert_eq!(extract_reply(&json!(["not", "an", "object"])), NO_RESPONSE);
    }
}
