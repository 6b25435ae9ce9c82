//! Entity structs for all Noesis domain objects.
//!
//! These are the presentation-ready shapes handed to view code: dates are
//! real `DateTime<Utc>` values and type-specific fields live in tagged
//! unions rather than optional property bags. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! schema generation.

mod author;
mod definition;
mod source;
mod stats;

pub use author::{Author, AuthorKind};
pub use definition::{Definition, Rejection, ReviewStatus, UserDefinition};
pub use source::{BookDetails, JournalDetails, Source, SourceKind, WebDetails};
pub use stats::Stats;
