use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A quoted author. Either a natural person or an organization, selected by
/// the `kind` union; exactly one variant's fields exist by construction.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    /// Human-readable id, e.g. `max-mustermann-8361`.
    pub slug_id: String,
    pub submitted_by: String,
    pub submitted_date: DateTime<Utc>,
    pub kind: AuthorKind,
}

/// Person or organization payload of an [`Author`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthorKind {
    Person {
        first_name: String,
        last_name: String,
    },
    Organization {
        organization_name: String,
    },
}
