use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One Indian Penal Code section as returned by the section lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IpcSection {
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub law_text: String,
}

/// Plain-language explanation of one IPC section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IpcExplanation {
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub law_text: String,
    #[serde(default)]
    pub explanation: String,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BackendHealth {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub ipc_rows: u64,
    #[serde(default)]
    pub women_rows: u64,
    #[serde(default)]
    pub ipc_sections: u64,
    #[serde(default)]
    pub helplines: u64,
}
