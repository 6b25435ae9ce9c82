use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Source;
use crate::enums::Category;

/// A crowdsourced definition quoted from a source.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Definition {
    pub id: String,
    pub category: Category,
    pub content: String,
    pub source: Source,
    pub submitted_by: String,
    pub submitted_on: DateTime<Utc>,
}

/// A definition as seen by its owner or a reviewer: the plain definition
/// plus review status and the ordered rejection log. Other users never see
/// this richer shape.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserDefinition {
    pub definition: Definition,
    pub status: ReviewStatus,
    pub rejections: Vec<Rejection>,
}

/// Review state of a submitted definition.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReviewStatus {
    Approved,
    Pending,
    Declined {
        declinement_message: Option<String>,
    },
}

/// One decline event in a definition's rejection log.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Rejection {
    pub rejected_by: String,
    pub rejected_on: DateTime<Utc>,
    pub reason: String,
}
