//! FansApprove Rating web frontend
//!
//! A small server-rendered frontend for NBA player sentiment ratings. Pages
//! are built from read-only calls to the sentiment backend API and rendered
//! to HTML on the server.
//!
//! ## Features
//!
//! - **Player Search**: `/` lists players matching the `q` search parameter
//! - **Player Detail**: `/players/{id}` shows the player, a 14-day sentiment
//!   chart, and the latest narrative summary
//! - **Graceful Degradation**: any failed backend call renders an empty list,
//!   an empty chart, or a placeholder instead of an error page
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clap::Parser;
//! use fansapprove_web::{cli::Frontend, web::serve};
//!
//! # async fn example() -> fansapprove_web::Result<()> {
//! let config = Frontend::parse_from(["fansapprove-web", "--backend-url", "http://localhost:8000"]);
//! serve(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export SENTIMENT_BACKEND_URL=http://localhost:8000
//! export SENTIMENT_BIND=127.0.0.1:3000
//! ```

pub mod backend;
pub mod cli;
pub mod core;
pub mod error;
pub mod web;

// Re-export commonly used types
pub use backend::types::{MetricPoint, Narrative, Player};
pub use cli::types::{
    endpoint::BackendUrl,
    ids::PlayerId,
    time::{Clock, MetricsWindow},
};
pub use error::{FrontendError, Result};

pub const BACKEND_URL_ENV_VAR: &str = "SENTIMENT_BACKEND_URL";
pub const BIND_ENV_VAR: &str = "SENTIMENT_BIND";
pub const TIMEOUT_ENV_VAR: &str = "SENTIMENT_TIMEOUT_SECS";
pub const LOG_LEVEL_ENV_VAR: &str = "RUST_LOG";
