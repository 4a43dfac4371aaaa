//! Error types for the sentiment frontend

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FrontendError>;

#[derive(Error, Debug)]
pub enum FrontendError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid backend URL {url}: {reason}")]
    InvalidBackendUrl { url: String, reason: String },

    #[error("Invalid player ID: {id:?}")]
    InvalidPlayerId { id: String },

    #[error("Logging setup failed: {message}")]
    Logging { message: String },
}
