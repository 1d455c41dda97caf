//! The domain error surfaced by the HTTP handlers.
//!
//! There is exactly one kind: a lookup by id found nothing. It renders as
//! `404` with the fixed body `{"message":"Not found"}`.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// No todo matches the requested id.
    NotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound => write!(f, "not found"),
        }
    }
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": "Not found" }))).into_response()
            }
        }
    }
}
