//! Cross-cutting error types for Nyaya.
//!
//! Transport errors live in `nyaya-client` and configuration errors in
//! `nyaya-config`. Both converge into `anyhow` inside `nyaya-cli`.

use thiserror::Error;

use crate::enums::SessionStatus;

/// Errors raised by the session state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A session state machine transition was attempted that is not allowed.
    #[error("Invalid session transition from {from} to {to}")]
    InvalidTransition {
        from: SessionStatus,
        to: SessionStatus,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_names_both_states() {
        let err = CoreError::InvalidTransition {
            from: SessionStatus::Idle,
            to: SessionStatus::Succeeded,
        };
        assert_eq!(
            err.to_string(),
            "Invalid session transition from idle to succeeded"
        );
    }
}
