//! Client error types.

use noesis_core::errors::ConvertError;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when calling the Noesis backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure: network error, timeout, or a body that is
    /// not the expected envelope.
    #[error("broken response: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an envelope reporting a failure.
    #[error("API error from '{endpoint}': {message}")]
    Api {
        endpoint: String,
        /// Human-readable message from the envelope.
        message: String,
        /// Structured detail from the envelope's `error` field, if any.
        fault: Option<ApiFault>,
    },

    /// A fetched record did not match the client's contract.
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Failure detail carried in the envelope's `error` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFault {
    /// The structured `{errorCode, errorMessage}` shape.
    Structured {
        error_code: String,
        error_message: String,
    },
    /// Anything else the backend put in the field.
    Opaque(serde_json::Value),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StructuredFault {
    error_code: String,
    error_message: String,
}

impl ApiFault {
    /// Interpret a raw envelope `error` value.
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Self {
        match serde_json::from_value::<StructuredFault>(value.clone()) {
            Ok(fault) => Self::Structured {
                error_code: fault.error_code,
                error_message: fault.error_message,
            },
            Err(_) => Self::Opaque(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn structured_shape_is_recognized() {
        let fault = ApiFault::from_value(json!({
            "errorCode": "E_NOT_FOUND",
            "errorMessage": "no such source"
        }));
        assert_eq!(
            fault,
            ApiFault::Structured {
                error_code: "E_NOT_FOUND".into(),
                error_message: "no such source".into(),
            }
        );
    }

    #[test]
    fn anything_else_stays_opaque() {
        let fault = ApiFault::from_value(json!("database exploded"));
        assert_eq!(fault, ApiFault::Opaque(json!("database exploded")));
    }

    #[test]
    fn partial_structured_shape_stays_opaque() {
        let fault = ApiFault::from_value(json!({ "errorCode": "E_HALF" }));
        assert_eq!(fault, ApiFault::Opaque(json!({ "errorCode": "E_HALF" })));
    }
}
