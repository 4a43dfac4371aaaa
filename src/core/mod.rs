//! Core utilities for the sentiment frontend
//!
//! This module consolidates the plumbing shared by the backend client and
//! the web server:
//! - `http`: backend HTTP client construction
//! - `logging`: tracing subscriber setup

pub mod http;
pub mod logging;

// Re-export commonly used items for convenience
pub use http::{build_client, default_headers};
pub use logging::initialize_logging;
