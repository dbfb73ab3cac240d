//! Lawyer consultation endpoint.

use nyaya_core::entities::ConsultationRequest;

use crate::{ApiClient, error::ClientError, http::check_response};

const ERROR_FIELDS: &[&str] = &["error"];
const FALLBACK_ERROR: &str = "Request failed";

impl ApiClient {
    /// Submit a consultation request. Any 2xx status is success; the body is
    /// not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or times out, or the
    /// backend returns a non-success status.
    pub async fn request_consultation(
        &self,
        request: &ConsultationRequest,
    ) -> Result<(), ClientError> {
        let url = self.endpoint("/api/consultation");
        tracing::debug!(method = %request.preferred_method, "submitting consultation request");

        let resp = self.send(self.http.post(&url).json(request)).await?;
        check_response(resp, ERROR_FIELDS, FALLBACK_ERROR).await?;
        Ok(())
    }
}
