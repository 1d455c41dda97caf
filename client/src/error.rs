//! Error taxonomy for the todo API client.
//!
//! `NotFound` gets its own variant since callers routinely branch on "does
//! this todo exist". Every other unexpected status keeps its code and raw
//! body for debugging.

use std::fmt;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server answered 404: no todo with the requested id.
    NotFound,

    /// A status the operation does not expect (other than 404).
    UnexpectedStatus { status: u16, body: String },

    /// The request payload could not be encoded as JSON.
    Serialize(String),

    /// The response body did not decode into the expected type.
    Deserialize(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "todo not found"),
            ApiError::UnexpectedStatus { status, body } => {
                write!(f, "unexpected HTTP {status}: {body}")
            }
            ApiError::Serialize(msg) => write!(f, "request encoding failed: {msg}"),
            ApiError::Deserialize(msg) => write!(f, "response decoding failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
