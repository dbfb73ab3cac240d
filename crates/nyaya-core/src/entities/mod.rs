//! Wire and domain structs for the Nyaya legal-information backend.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Field renames follow the backend's JSON
//! keys exactly.

mod chat;
mod consultation;
mod crime;
mod ipc;
mod judgment;

pub use chat::{ChatRequest, HistoryEntry, Turn};
pub use consultation::ConsultationRequest;
pub use crime::{StateCrimeTotal, WomenDashboardPayload, YearlyCrimeTotal};
pub use ipc::{BackendHealth, IpcExplanation, IpcSection};
pub use judgment::{QueryResult, SearchEnvelope};
