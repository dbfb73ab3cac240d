//! Shared HTTP response helpers for endpoint modules.
//!
//! Centralizes status-code checks (non-success → [`ClientError::Api`] with a
//! message pulled from the error body) so endpoint modules stay focused on
//! request construction and response mapping.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise reads the body and
/// takes the first non-empty string among `error_fields`; an unreadable or
/// non-JSON body falls back to `fallback`.
pub async fn check_response(
    resp: reqwest::Response,
    error_fields: &[&str],
    fallback: &str,
) -> Result<reqwest::Response, ClientError> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    let message = error_message(&body, error_fields).unwrap_or_else(|| fallback.to_string());
    tracing::debug!(status, %message, "backend returned error status");
    Err(ClientError::Api { status, message })
}

/// First non-empty string field of a JSON object body, in priority order.
#[must_use]
pub fn first_string_field(body: &Value, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .filter_map(|field| body.get(field).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

fn error_message(body: &str, fields: &[&str]) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    first_string_field(&value, fields)
}

/// Decode a JSON body, mapping syntax/shape failures to [`ClientError::Parse`].
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice(bytes).map_err(|e| ClientError::Parse(e.to_string()))
}

/// Decode each row independently, skipping rows that do not fit `T`.
pub fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>, endpoint: &str) -> Vec<T> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::debug!(endpoint, index, %e, "skipping malformed row");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp, &["error"], "fail").await.is_ok());
    }

    #[tokio::test]
    async fn check_response_reads_error_field() {
        let resp = mock_response(500, r#"{"error":"model overloaded"}"#);
        let err = check_response(resp, &["error"], "Chat failed")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Api { status: 500, ref message } if message == "model overloaded"
        ));
    }

    #[tokio::test]
    async fn check_response_respects_field_priority() {
        let resp = mock_response(500, r#"{"error":"Search failed","message":"index missing"}"#);
        let err = check_response(resp, &["message", "error"], "x")
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "index missing");
    }

    #[tokio::test]
    async fn check_response_non_json_body_uses_fallback() {
        let resp = mock_response(502, "<html>Bad Gateway</html>");
        let err = check_response(resp, &["error"], "Request failed")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Api { status: 502, ref message } if message == "Request failed"
        ));
    }

    #[test]
    fn first_string_field_skips_empty_and_non_strings() {
        let body = json!({ "reply": "", "text": 42, "answer": "ok" });
        assert_eq!(first_string_field(&body, &["reply", "text"]), None);
        assert_eq!(
            first_string_field(&body, &["reply", "text", "answer"]).as_deref(),
            Some("ok")
        );
    }

    #[test]
    fn decode_rows_skips_malformed_rows() {
        #[derive(serde::Deserialize)]
        struct Row {
            n: u32,
        }
        let rows = vec![json!({"n": 1}), json!("garbage"), json!({"n": 3})];
        let decoded: Vec<Row> = decode_rows(rows, "test");
        assert_eq!(decoded.iter().map(|r| r.n).collect::<Vec<_>>(), vec![1, 3]);
    }
}
