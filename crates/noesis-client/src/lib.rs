//! # noesis-client
//!
//! HTTP data-access layer for the Noesis backend.
//!
//! One module per backend resource:
//! - authors (fetch by id, paginated listing, create, change, delete)
//! - sources (same shape, plus the author association)
//! - definitions (newest, listing, submit, change, delete, approve/reject,
//!   own-definitions listing with rejection history)
//! - stats (corpus statistics)
//!
//! Every operation performs exactly one HTTP round trip against
//! `<base_url>/api/v1/<endpoint>`, decodes the uniform
//! `{message, error, data}` envelope, and converts fetched wire records into
//! their domain shapes at the boundary. Failures are values: [`ClientError`]
//! distinguishes transport breakage, server-reported errors, and contract
//! mismatches. No retry, caching, or cancellation happens at this layer.

pub mod authors;
pub mod definitions;
pub mod sources;
pub mod stats;

mod error;
mod page;
mod transport;

pub use error::{ApiFault, ClientError};
pub use page::{PageCountRequest, PageRequest, total_pages};
pub use transport::ApiClient;
