//! Backend base address.

use crate::error::{FrontendError, Result};
use reqwest::Url;
use std::fmt;
use std::str::FromStr;

/// Default backend address inside the compose network.
pub const DEFAULT_BACKEND_URL: &str = "http://backend:8000";

/// Validated base URL of the sentiment backend.
///
/// May carry a path prefix (`http://host/api`); endpoint segments are
/// appended after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendUrl(Url);

impl BackendUrl {
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Append path segments, percent-encoding each one.
    pub fn endpoint<S: AsRef<str>>(&self, segments: &[S]) -> Result<Url> {
        let mut url = self.0.clone();
        url.path_segments_mut()
            .map_err(|_| FrontendError::InvalidBackendUrl {
                url: self.0.to_string(),
                reason: "cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl fmt::Display for BackendUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BackendUrl {
    type Err = FrontendError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| FrontendError::InvalidBackendUrl {
            url: s.to_string(),
            reason,
        };

        let url = Url::parse(s).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("cannot be a base".to_string()));
        }
        Ok(Self(url))
    }
}
