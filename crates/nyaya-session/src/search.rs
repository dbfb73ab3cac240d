//! Supreme Court judgment search session.

use nyaya_client::{ApiClient, ClientError};
use nyaya_core::entities::SearchEnvelope;
use nyaya_core::enums::SessionStatus;
use tokio::task::JoinHandle;

use crate::{Mounted, Rejected, SessionCore, Ticket};

pub const EMPTY_QUESTION: &str = "Please enter a legal question";
pub const NO_MATCHES: &str =
    "No relevant Supreme Court judgments found. Try rephrasing your question.";
pub const BACKEND_UNREACHABLE: &str =
    "Failed to search Supreme Court judgments. Please ensure the backend is running.";

/// Why the last search ended in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    /// The request succeeded but the backend reported zero matches.
    NoMatches,
    /// The request itself failed.
    Request,
}

/// Search box state.
///
/// `results` holds the envelope shown to the user. A zero-match envelope is
/// never shown; it is parked in `last_query` and the session reports
/// [`SearchFailure::NoMatches`].
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    core: SessionCore,
    results: Option<SearchEnvelope>,
    last_query: Option<SearchEnvelope>,
    failure: Option<SearchFailure>,
}

impl SearchSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn core(&self) -> &SessionCore {
        &self.core
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.core.status()
    }

    #[must_use]
    pub const fn results(&self) -> Option<&SearchEnvelope> {
        self.results.as_ref()
    }

    #[must_use]
    pub const fn last_query(&self) -> Option<&SearchEnvelope> {
        self.last_query.as_ref()
    }

    #[must_use]
    pub const fn failure(&self) -> Option<SearchFailure> {
        self.failure
    }

    /// Message shown in place of results, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.core.last_error()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.core.set_input(text);
    }

    /// Text shown for a locally rejected submission.
    #[must_use]
    pub const fn rejection_message(reason: Rejected) -> &'static str {
        match reason {
            Rejected::Empty | Rejected::Missing(_) => EMPTY_QUESTION,
            Rejected::Busy => "A search is already running",
        }
    }

    /// Accept `question`, clearing the visible results and error. Returns the
    /// trimmed question to send.
    ///
    /// # Errors
    ///
    /// [`Rejected::Empty`] for a blank question, [`Rejected::Busy`] while a
    /// search is pending.
    pub fn submit(&mut self, question: &str) -> Result<(Ticket, String), Rejected> {
        let question = SessionCore::validate_text(question)?;
        let ticket = self.core.begin()?;
        self.results = None;
        self.failure = None;
        Ok((ticket, question))
    }

    /// Submit whatever is in the input buffer.
    ///
    /// # Errors
    ///
    /// Same as [`Self::submit`].
    pub fn submit_input(&mut self) -> Result<(Ticket, String), Rejected> {
        let text = self.core.input().to_string();
        self.submit(&text)
    }

    /// Apply the backend outcome for `ticket`. Returns `false` for a stale
    /// ticket.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        outcome: Result<SearchEnvelope, ClientError>,
    ) -> bool {
        match outcome {
            Ok(envelope) if envelope.is_empty_match() => {
                if !self.core.fail(ticket, NO_MATCHES) {
                    return false;
                }
                tracing::debug!(query = %envelope.query, "search returned no matches");
                self.failure = Some(SearchFailure::NoMatches);
                self.last_query = Some(envelope);
            }
            Ok(envelope) => {
                if !self.core.succeed(ticket) {
                    return false;
                }
                self.last_query = Some(envelope.clone());
                self.results = Some(envelope);
            }
            Err(e) => {
                let message = if e.is_unreachable() {
                    BACKEND_UNREACHABLE.to_string()
                } else {
                    e.user_message()
                };
                tracing::warn!(%e, "judgment search failed");
                if !self.core.fail(ticket, message) {
                    return false;
                }
                self.failure = Some(SearchFailure::Request);
            }
        }
        true
    }
}

/// Run `question` and wait for the outcome to land in the session.
///
/// # Errors
///
/// Returns the [`Rejected`] reason if the submission was dropped.
pub async fn run(
    client: &ApiClient,
    widget: &Mounted<SearchSession>,
    question: &str,
) -> Result<(), Rejected> {
    let (ticket, question) = widget.with(|session| session.submit(question))?;
    let outcome = client.search_judgments(&question).await;
    widget.with(|session| session.resolve(ticket, outcome));
    Ok(())
}

/// Run `question` in the background, discarding the outcome if the widget
/// is torn down first.
///
/// # Errors
///
/// Returns the [`Rejected`] reason if the submission was dropped.
pub fn spawn_run(
    client: ApiClient,
    widget: &Mounted<SearchSession>,
    question: &str,
) -> Result<JoinHandle<()>, Rejected> {
    let (ticket, question) = widget.with(|session| session.submit(question))?;
    let detached = widget.detach();

    Ok(tokio::spawn(async move {
        let outcome = client.search_judgments(&question).await;
        detached.apply(|session| session.resolve(ticket, outcome));
    }))
}

#[cfg(test)]
mod tests {
    use nyaya_core::entities::QueryResult;
    use pretty_assertions::assert_eq;

    use super::*;

    fn envelope(results: Vec<QueryResult>) -> SearchEnvelope {
        SearchEnvelope {
            query: "bail conditions".into(),
            total_results: Some(results.len() as u64),
            results,
            note: "Derived from verified judgments.".into(),
        }
    }

    fn hit(case_name: &str, score: f64) -> QueryResult {
        QueryResult {
            case_name: case_name.into(),
            confidence_score: score,
            ..QueryResult::default()
        }
    }

    #[test]
    fn blank_question_is_rejected_with_prompt() {
        let mut session = SearchSession::new();
        let reason = session.submit("  ").unwrap_err();
        assert_eq!(reason, Rejected::Empty);
        assert_eq!(SearchSession::rejection_message(reason), EMPTY_QUESTION);
        assert_eq!(session.status(), SessionStatus::Idle);
    }

    #[test]
    fn zero_results_is_a_no_match_failure() {
        let mut session = SearchSession::new();
        let (ticket, question) = session.submit(" bail conditions ").expect("accepted");
        assert_eq!(question, "bail conditions");

        assert!(session.resolve(ticket, Ok(envelope(vec![]))));
        assert_eq!(session.status(), SessionStatus::Failed);
        assert_eq!(session.error(), Some(NO_MATCHES));
        assert_eq!(session.failure(), Some(SearchFailure::NoMatches));
        assert!(session.results().is_none());
        assert_eq!(
            session.last_query().map(|e| e.query.as_str()),
            Some("bail conditions")
        );
    }

    #[test]
    fn results_keep_backend_order() {
        let mut session = SearchSession::new();
        let (ticket, _) = session.submit("remand").expect("accepted");
        let ranked = vec![hit("A v. B", 0.4), hit("C v. D", 0.9)];

        assert!(session.resolve(ticket, Ok(envelope(ranked))));
        let names: Vec<&str> = session
            .results()
            .expect("results shown")
            .results
            .iter()
            .map(|r| r.case_name.as_str())
            .collect();
        assert_eq!(names, vec!["A v. B", "C v. D"]);
        assert_eq!(session.error(), None);
    }

    #[test]
    fn api_error_message_is_shown() {
        let mut session = SearchSession::new();
        let (ticket, _) = session.submit("remand").expect("accepted");
        let err = ClientError::Api {
            status: 500,
            message: "Search failed".into(),
        };

        assert!(session.resolve(ticket, Err(err)));
        assert_eq!(session.error(), Some("Search failed"));
        assert_eq!(session.failure(), Some(SearchFailure::Request));
    }

    #[test]
    fn resubmit_clears_previous_results_and_error() {
        let mut session = SearchSession::new();
        let (ticket, _) = session.submit("first").expect("accepted");
        session.resolve(ticket, Ok(envelope(vec![hit("A v. B", 0.5)])));
        assert!(session.results().is_some());

        session.submit("second").expect("accepted");
        assert!(session.results().is_none());
        assert_eq!(session.failure(), None);
        assert_eq!(session.status(), SessionStatus::Pending);
    }

    fn decoded(body: serde_json::Value) -> SearchEnvelope {
        serde_json::from_value(body).expect("envelope decodes")
    }

    #[test]
    fn missing_total_does_not_hide_results() {
        let mut session = SearchSession::new();
        let (ticket, _) = session.submit("bail").expect("accepted");
        let body = decoded(serde_json::json!({
            "query": "bail",
            "results": [{ "case_name": "A v. B", "confidence_score": 0.7 }]
        }));

        assert!(session.resolve(ticket, Ok(body)));
        assert_eq!(session.status(), SessionStatus::Succeeded);
        assert_eq!(session.error(), None);
        assert_eq!(session.results().map(|e| e.results.len()), Some(1));
    }

    #[test]
    fn null_total_with_results_is_a_success() {
        let mut session = SearchSession::new();
        let (ticket, _) = session.submit("bail").expect("accepted");
        let body = decoded(serde_json::json!({
            "query": "bail",
            "total_results": null,
            "results": [{ "case_name": "A v. B" }, { "case_name": "C v. D" }]
        }));

        assert!(session.resolve(ticket, Ok(body)));
        assert_eq!(session.status(), SessionStatus::Succeeded);
        assert_eq!(session.results().map(|e| e.results.len()), Some(2));
    }

    #[test]
    fn null_total_without_results_is_no_match() {
        let mut session = SearchSession::new();
        let (ticket, _) = session.submit("bail").expect("accepted");
        let body = decoded(serde_json::json!({ "total_results": null, "results": [] }));

        assert!(session.resolve(ticket, Ok(body)));
        assert_eq!(session.error(), Some(NO_MATCHES));
        assert_eq!(session.failure(), Some(SearchFailure::NoMatches));
    }

    #[test]
    fn timeout_is_reported_distinctly() {
        let mut session = SearchSession::new();
        let (ticket, _) = session.submit("remand").expect("accepted");
        session.resolve(ticket, Err(ClientError::Timeout { secs: 30 }));
        assert_eq!(session.error(), Some("Request timed out after 30s"));
    }
}
