//! ID types for players served by the sentiment backend.

use crate::error::{FrontendError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for backend player identifiers.
///
/// The backend hands out UUIDs, but the frontend never interprets them: the
/// value is passed back verbatim in backend paths and detail-page links.
///
/// # Examples
///
/// ```rust
/// use fansapprove_web::PlayerId;
///
/// let id: PlayerId = "6f1c0a4e-3b0e-4c7e-9d1f-0c3a2b1d4e5f".parse().unwrap();
/// assert_eq!(id.detail_path(), "/players/6f1c0a4e-3b0e-4c7e-9d1f-0c3a2b1d4e5f");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Frontend route of this player's detail page, percent-encoded.
    pub fn detail_path(&self) -> String {
        format!("/players/{}", urlencoding::encode(&self.0))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = FrontendError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(FrontendError::InvalidPlayerId { id: s.to_string() });
        }
        Ok(Self(s.to_string()))
    }
}
