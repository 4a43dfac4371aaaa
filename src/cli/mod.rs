//! Command-line and environment configuration.

pub mod types;

use clap::Parser;
use std::net::SocketAddr;
use types::endpoint::{BackendUrl, DEFAULT_BACKEND_URL};

use crate::{BACKEND_URL_ENV_VAR, BIND_ENV_VAR, LOG_LEVEL_ENV_VAR, TIMEOUT_ENV_VAR};

/// Server-rendered frontend for NBA player sentiment ratings.
///
/// Every option can also be set through the environment (or a `.env` file).
#[derive(Debug, Clone, Parser)]
#[clap(name = "fansapprove-web", about = "FansApprove Rating web frontend")]
pub struct Frontend {
    /// Base address of the sentiment backend API.
    #[clap(long, env = BACKEND_URL_ENV_VAR, default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: BackendUrl,

    /// Address the web server listens on.
    #[clap(long, env = BIND_ENV_VAR, default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Per-request timeout for backend calls, in seconds.
    #[clap(long, env = TIMEOUT_ENV_VAR, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Tracing filter directive (e.g. `info`, `fansapprove_web=debug`).
    #[clap(long, env = LOG_LEVEL_ENV_VAR, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_arguments() {
        let app = Frontend::try_parse_from([
            "fansapprove-web",
            "--backend-url",
            "http://localhost:8000",
            "--bind",
            "127.0.0.1:8080",
            "--timeout-secs",
            "3",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(app.backend_url.as_url().as_str(), "http://localhost:8000/");
        assert_eq!(app.bind, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(app.timeout_secs, 3);
        assert_eq!(app.log_level, "debug");
    }

    #[test]
    fn test_invalid_backend_url_is_rejected() {
        let result =
            Frontend::try_parse_from(["fansapprove-web", "--backend-url", "ftp://backend"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_bind_is_rejected() {
        let result = Frontend::try_parse_from(["fansapprove-web", "--bind", "localhost"]);
        assert!(result.is_err());
    }
}
