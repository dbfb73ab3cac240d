//! Shared exchange state machine used by every widget session.

use nyaya_core::enums::SessionStatus;
use nyaya_core::errors::CoreError;
use thiserror::Error;

/// Identifies one accepted submission. Only the in-flight ticket resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Why a submission was dropped. A rejected submission changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejected {
    #[error("input is empty")]
    Empty,

    #[error("required field '{0}' is empty")]
    Missing(&'static str),

    #[error("a request is already pending")]
    Busy,
}

/// Status, input buffer, and in-flight bookkeeping common to every widget.
///
/// `last_error` is `Some` exactly when `status` is `Failed`.
#[derive(Debug, Clone)]
pub struct SessionCore {
    status: SessionStatus,
    input: String,
    last_error: Option<String>,
    in_flight: Option<Ticket>,
    issued: u64,
    open: bool,
}

impl Default for SessionCore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionCore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: SessionStatus::Idle,
            input: String::new(),
            last_error: None,
            in_flight: None,
            issued: 0,
            open: true,
        }
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.status, SessionStatus::Pending)
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Collapse the widget. An in-flight request is not aborted; its
    /// response still resolves into this session.
    pub fn close(&mut self) {
        self.open = false;
        if matches!(self.status, SessionStatus::Succeeded | SessionStatus::Failed) {
            self.last_error = None;
            let _ = self.transition(SessionStatus::Idle);
        }
    }

    /// Trimmed, non-empty submission text.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected::Empty`] for empty or whitespace-only text.
    pub fn validate_text(text: &str) -> Result<String, Rejected> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Rejected::Empty);
        }
        Ok(trimmed.to_string())
    }

    /// Enter `Pending` and issue the ticket for the new request.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected::Busy`] while another request is pending.
    pub fn begin(&mut self) -> Result<Ticket, Rejected> {
        self.transition(SessionStatus::Pending)
            .map_err(|_| Rejected::Busy)?;

        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.in_flight = Some(ticket);
        self.input.clear();
        self.last_error = None;
        tracing::debug!(ticket = ticket.0, "exchange started");
        Ok(ticket)
    }

    /// Resolve `ticket` as a success. Returns `false` for a stale ticket.
    pub fn succeed(&mut self, ticket: Ticket) -> bool {
        self.settle(ticket, SessionStatus::Succeeded, None)
    }

    /// Resolve `ticket` as a failure. Returns `false` for a stale ticket.
    pub fn fail(&mut self, ticket: Ticket, message: impl Into<String>) -> bool {
        self.settle(ticket, SessionStatus::Failed, Some(message.into()))
    }

    fn settle(&mut self, ticket: Ticket, next: SessionStatus, error: Option<String>) -> bool {
        if self.in_flight != Some(ticket) {
            tracing::debug!(ticket = ticket.0, "ignoring stale response");
            return false;
        }
        if let Err(e) = self.transition(next) {
            tracing::error!(%e, ticket = ticket.0, "in-flight ticket without pending status");
            return false;
        }
        self.in_flight = None;
        self.last_error = error;
        true
    }

    fn transition(&mut self, next: SessionStatus) -> Result<(), CoreError> {
        if !self.status.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        tracing::debug!(from = %self.status, to = %next, "session transition");
        self.status = next;
        Ok(())
    }
}
