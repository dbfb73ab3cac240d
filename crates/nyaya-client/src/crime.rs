//! Crime dashboard endpoints.

use nyaya_core::entities::{StateCrimeTotal, WomenDashboardPayload, YearlyCrimeTotal};
use serde_json::Value;

use crate::{
    ApiClient,
    error::ClientError,
    http::{check_response, decode, decode_rows},
};

const ERROR_FIELDS: &[&str] = &["error", "message"];
const FALLBACK_ERROR: &str = "API error";

impl ApiClient {
    /// Year-wise IPC crime totals. A `null` body is an empty dataset; rows
    /// that are not objects are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or times out, the backend
    /// returns a non-success status, or the body is not a JSON array.
    pub async fn crime_summary(&self) -> Result<Vec<YearlyCrimeTotal>, ClientError> {
        let url = self.endpoint("/api/crime/summary");
        let resp = self.send(self.http.get(&url)).await?;
        let resp = check_response(resp, ERROR_FIELDS, FALLBACK_ERROR).await?;

        let rows: Option<Vec<Value>> = decode(&self.body(resp).await?)?;
        Ok(decode_rows(rows.unwrap_or_default(), "crime/summary"))
    }

    /// State-wise totals of crimes against women. A missing or `null`
    /// `state_wise` field is an empty dataset.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or times out, the backend
    /// returns a non-success status, or the body is not a JSON object.
    pub async fn women_dashboard(&self) -> Result<Vec<StateCrimeTotal>, ClientError> {
        let url = self.endpoint("/api/women/dashboard");
        let resp = self.send(self.http.get(&url)).await?;
        let resp = check_response(resp, ERROR_FIELDS, FALLBACK_ERROR).await?;

        let payload: WomenDashboardPayload = decode(&self.body(resp).await?)?;
        Ok(decode_rows(
            payload.state_wise.unwrap_or_default(),
            "women/dashboard",
        ))
    }
}
