//! I/O-free client library for the todo REST API.
//!
//! # Overview
//! [`TodoClient`] turns CRUD calls into [`HttpRequest`] values and decodes
//! the [`HttpResponse`] the caller got back, without ever opening a socket
//! itself. The caller owns the round-trip, which keeps this crate
//! deterministic: every build/parse pair has plain unit tests, and the
//! integration suite plugs in a real transport against a live `todo-server`.
//!
//! # Design
//! - `TodoClient` is stateless, holding only the server's base URL.
//! - DTOs are defined here rather than imported from the server crate: the
//!   client promises a wire format, not a Rust dependency, and integration
//!   tests catch schema drift between the two.
//! - `NotFound` is a dedicated error variant because callers branch on it.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Todo, UpdateTodo};
