use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Aggregate counts over the whole corpus. Read-only snapshot, no identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Stats {
    pub definition_count: u64,
    pub source_count: u64,
    pub author_count: u64,
    pub current_quarter_definition_count: u64,
    pub current_quarter_source_count: u64,
    pub current_quarter_author_count: u64,
}
