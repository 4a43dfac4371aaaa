//! Sentiment backend API: response types and the HTTP client that fetches them.

pub mod http;
pub mod types;

pub use http::BackendClient;
