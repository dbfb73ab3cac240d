use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lenient;

/// Row of `GET /api/crime/summary`: IPC crime total for one year.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct YearlyCrimeTotal {
    #[serde(rename = "YEAR", default, deserialize_with = "lenient::count")]
    #[schemars(with = "Option<u64>")]
    pub year: Option<u64>,
    #[serde(
        rename = "TOTAL IPC CRIMES",
        default,
        deserialize_with = "lenient::count"
    )]
    #[schemars(with = "Option<u64>")]
    pub total: Option<u64>,
}

/// Row of the women-crime dashboard: total cases for one state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StateCrimeTotal {
    #[serde(rename = "State", default, deserialize_with = "lenient::label")]
    #[schemars(with = "Option<String>")]
    pub state: Option<String>,
    #[serde(rename = "TOTAL", default, deserialize_with = "lenient::count")]
    #[schemars(with = "Option<u64>")]
    pub total: Option<u64>,
}

/// Body of `GET /api/women/dashboard`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WomenDashboardPayload {
    #[serde(default)]
    pub state_wise: Option<Vec<serde_json::Value>>,
}
