use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lenient;

/// One ranked judgment match from the semantic search backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct QueryResult {
    #[serde(default)]
    pub case_name: String,
    #[serde(rename = "judgement_date", default)]
    pub date: String,
    #[serde(default)]
    pub matched_question: String,
    #[serde(default)]
    pub answer: String,
    /// Expected in `[0, 1]`; not validated.
    #[serde(default)]
    pub confidence_score: f64,
}

/// Response envelope of `GET /api/supreme-court/search`.
///
/// `total_results` is reported by the backend and is not trusted to match
/// `results.len()`; it may also be absent or `null`. Result order is the
/// backend's ranking.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub query: String,
    #[serde(default, deserialize_with = "lenient::count")]
    #[schemars(with = "Option<u64>")]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub results: Vec<QueryResult>,
    #[serde(default)]
    pub note: String,
}

impl SearchEnvelope {
    /// The backend reported zero matches. Without a reported total, an empty
    /// result list is the only signal.
    #[must_use]
    pub fn is_empty_match(&self) -> bool {
        match self.total_results {
            Some(total) => total == 0,
            None => self.results.is_empty(),
        }
    }
}
