//! HTTP transport for the fakerapi client crates.
//!
//! This crate wraps `reqwest` behind a small GET-and-deserialize surface so
//! the typed client does not depend on a specific HTTP backend. The async
//! [`HttpClient`] owns one pooled connection for the lifetime of the client;
//! the [`blocking`] module (feature `blocking`) performs self-contained
//! one-shot requests instead.
//!
//! # Example
//!
//! ```no_run
//! use fakerapi_http_client::{HttpClient, Response};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct ApiResponse {
//!     message: String,
//! }
//!
//! async fn example() -> Response<ApiResponse> {
//!     let client = HttpClient::new();
//!     client.fetch("https://api.example.com/data").await
//! }
//! ```

mod client;
mod error;

#[cfg(feature = "blocking")]
pub mod blocking;

pub use client::{fetch, HttpClient, HttpClientBuilder};
pub use error::HttpError;

/// HTTP Response type - generic over the body type R and error type E
/// This is the primary return type for all HTTP operations
pub type Response<R, E = HttpError> = Result<R, E>;
