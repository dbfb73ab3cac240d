//! Floating chat assistant session.

use nyaya_client::{ApiClient, ClientError};
use nyaya_core::entities::{ChatRequest, Turn};
use nyaya_core::enums::SessionStatus;
use tokio::task::JoinHandle;

use crate::{Mounted, Rejected, SessionCore, Ticket};

/// Prefix of the assistant turn appended when an exchange fails.
pub const ERROR_PREFIX: &str = "Error: ";

/// Chat widget state: the exchange core plus the transcript.
///
/// The transcript is append-only for the widget's mounted lifetime and is
/// echoed to the backend as context with each new message.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    core: SessionCore,
    history: Vec<Turn>,
}

impl ChatSession {
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
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.core.set_input(text);
    }

    pub fn close(&mut self) {
        self.core.close();
    }

    pub fn open(&mut self) {
        self.core.open();
    }

    /// Accept `text` and append it to the transcript before the request is
    /// sent. The returned request carries the transcript as it was before
    /// this message.
    ///
    /// # Errors
    ///
    /// [`Rejected::Empty`] for blank text, [`Rejected::Busy`] while a reply
    /// is pending. Neither changes the session.
    pub fn submit(&mut self, text: &str) -> Result<(Ticket, ChatRequest), Rejected> {
        let message = SessionCore::validate_text(text)?;
        let ticket = self.core.begin()?;

        let request = ChatRequest {
            message: message.clone(),
            history: self.history.iter().map(Turn::to_history_entry).collect(),
        };
        self.history.push(Turn::user(message));
        Ok((ticket, request))
    }

    /// Submit whatever is in the input buffer.
    ///
    /// # Errors
    ///
    /// Same as [`Self::submit`].
    pub fn submit_input(&mut self) -> Result<(Ticket, ChatRequest), Rejected> {
        let text = self.core.input().to_string();
        self.submit(&text)
    }

    /// Apply the backend outcome for `ticket`. Returns `false` if the ticket
    /// is stale and nothing was applied.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<String, ClientError>) -> bool {
        match outcome {
            Ok(reply) => {
                if !self.core.succeed(ticket) {
                    return false;
                }
                self.history.push(Turn::assistant(reply));
            }
            Err(e) => {
                let message = e.user_message();
                tracing::warn!(%e, "chat exchange failed");
                if !self.core.fail(ticket, message.clone()) {
                    return false;
                }
                self.history
                    .push(Turn::assistant(format!("{ERROR_PREFIX}{message}")));
            }
        }
        true
    }
}

/// Send `text` and wait for the reply to land in the transcript.
///
/// # Errors
///
/// Returns the [`Rejected`] reason if the submission was dropped.
pub async fn send(
    client: &ApiClient,
    widget: &Mounted<ChatSession>,
    text: &str,
) -> Result<(), Rejected> {
    let (ticket, request) = widget.with(|session| session.submit(text))?;
    let outcome = client.chat(&request).await;
    widget.with(|session| session.resolve(ticket, outcome));
    Ok(())
}

/// Send `text` in the background. The reply is applied only if the widget
/// is still mounted when it arrives.
///
/// # Errors
///
/// Returns the [`Rejected`] reason if the submission was dropped.
pub fn spawn_send(
    client: ApiClient,
    widget: &Mounted<ChatSession>,
    text: &str,
) -> Result<JoinHandle<()>, Rejected> {
    let (ticket, request) = widget.with(|session| session.submit(text))?;
    let detached = widget.detach();

    Ok(tokio::spawn(async move {
        let outcome = client.chat(&request).await;
        detached.apply(|session| session.resolve(ticket, outcome));
    }))
}

#[cfg(test)]
mod tests {
    use nyaya_core::enums::Role;
    use pretty_assertions::assert_eq;

    use super::*;

    fn transcript(session: &ChatSession) -> Vec<(Role, String)> {
        session
            .history()
            .iter()
            .map(|turn| (turn.role, turn.text.clone()))
            .collect()
    }

    #[test]
    fn blank_submit_changes_nothing() {
        let mut session = ChatSession::new();
        for text in ["", "   "] {
            assert_eq!(session.submit(text).unwrap_err(), Rejected::Empty);
            assert_eq!(session.status(), SessionStatus::Idle);
            assert!(session.history().is_empty());
        }
    }

    #[test]
    fn submit_while_pending_is_dropped() {
        let mut session = ChatSession::new();
        session.submit("first").expect("accepted");
        assert_eq!(session.submit("second").unwrap_err(), Rejected::Busy);
        assert_eq!(transcript(&session), vec![(Role::User, "first".to_string())]);
    }

    #[test]
    fn hello_hi_exchange() {
        let mut session = ChatSession::new();
        let (ticket, _) = session.submit("hello").expect("accepted");
        assert_eq!(session.status(), SessionStatus::Pending);

        assert!(session.resolve(ticket, Ok("hi".into())));
        assert_eq!(
            transcript(&session),
            vec![
                (Role::User, "hello".to_string()),
                (Role::Assistant, "hi".to_string())
            ]
        );
        assert_eq!(session.status(), SessionStatus::Succeeded);
        assert!(session.status().accepts_submit());
    }

    #[test]
    fn request_echoes_prior_history_only() {
        let mut session = ChatSession::new();
        let (ticket, first) = session.submit("hello").expect("accepted");
        assert!(first.history.is_empty());
        session.resolve(ticket, Ok("hi".into()));

        let (_, second) = session.submit("what is bail?").expect("accepted");
        assert_eq!(second.message, "what is bail?");
        let roles: Vec<Role> = second.history.iter().map(|h| h.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
        assert_eq!(second.history[1].content, "hi");
    }

    #[test]
    fn failure_appends_error_turn_and_allows_resubmit() {
        let mut session = ChatSession::new();
        let (ticket, _) = session.submit("hello").expect("accepted");
        let err = ClientError::Api {
            status: 500,
            message: "Chat failed".into(),
        };

        assert!(session.resolve(ticket, Err(err)));
        assert_eq!(session.status(), SessionStatus::Failed);
        assert_eq!(session.core().last_error(), Some("Chat failed"));
        assert_eq!(
            session.history().last().map(|t| t.text.as_str()),
            Some("Error: Chat failed")
        );

        session.submit("again").expect("failed session accepts resubmit");
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn input_buffer_is_cleared_on_accept() {
        let mut session = ChatSession::new();
        session.set_input("  typed question ");
        let (_, request) = session.submit_input().expect("accepted");
        assert_eq!(request.message, "typed question");
        assert_eq!(session.core().input(), "");
    }

    #[test]
    fn late_reply_after_close_is_applied() {
        let mut session = ChatSession::new();
        let (ticket, _) = session.submit("hello").expect("accepted");
        session.close();

        assert!(session.resolve(ticket, Ok("hi".into())));
        assert!(!session.core().is_open());
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn stale_reply_is_ignored() {
        let mut session = ChatSession::new();
        let (ticket, _) = session.submit("hello").expect("accepted");
        session.resolve(ticket, Ok("hi".into()));

        assert!(!session.resolve(ticket, Ok("duplicate".into())));
        assert_eq!(session.history().len(), 2);
    }
}
