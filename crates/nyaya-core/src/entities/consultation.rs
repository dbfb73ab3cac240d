use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::PreferredMethod;

/// Body of `POST /api/consultation`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConsultationRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub preferred_method: PreferredMethod,
    pub cost: u32,
}
