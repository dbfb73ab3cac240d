//! # nyaya-core
//!
//! Core types and error types shared by every Nyaya crate.
//!
//! - Wire types for the legal-information backend (chat, consultation,
//!   judgment search, crime dashboards, IPC sections)
//! - Session status enum with its state machine transitions
//! - Lenient numeric decoding for untrusted dashboard measures
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod lenient;
