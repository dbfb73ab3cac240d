//! # nyaya-session
//!
//! Session controllers for the interactive widgets: the chat assistant, the
//! judgment search box, and the lawyer consultation form.
//!
//! Every widget runs the same exchange lifecycle:
//!
//! ```text
//! submit (local)                       resolve (remote)
//! validate → append/snapshot → pending → succeeded | failed → next submit
//! ```
//!
//! `submit` and `resolve` are separate transitions. `submit` applies the
//! optimistic update and issues a [`Ticket`]; `resolve` applies the backend
//! outcome for that ticket only. A widget is held by [`Mounted`], and
//! background requests keep only a [`Detached`] handle, so a response that
//! lands after teardown is dropped instead of touching freed state.

pub mod chat;
pub mod consultation;
pub mod search;

mod exchange;
mod mounted;

pub use exchange::{Rejected, SessionCore, Ticket};
pub use mounted::{Detached, Mounted};
