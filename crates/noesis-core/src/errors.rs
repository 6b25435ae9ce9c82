//! Wire-to-domain conversion errors.
//!
//! Conversion failures indicate a client/server contract mismatch. They are
//! never absorbed by the transport layer and always propagate to the caller.

use thiserror::Error;

/// Errors raised while converting a fetched wire record to its domain shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A wire date string could not be parsed as RFC 3339.
    #[error("invalid date in field '{field}': {value}")]
    InvalidDate {
        /// Wire-format field name carrying the bad value.
        field: &'static str,
        value: String,
    },

    /// A type or status tag carried a value outside the closed set.
    #[error("invalid type '{kind}' on record {id}")]
    UnknownType { id: String, kind: String },

    /// A record's tag named a variant whose property bag is absent.
    #[error("record {id} is tagged '{kind}' but carries no matching properties")]
    MissingProperties { id: String, kind: String },
}
