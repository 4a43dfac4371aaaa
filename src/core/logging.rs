//! Logging and tracing setup

use crate::{FrontendError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter from a directive such as `info` or `fansapprove_web=debug,tower_http=info`.
///
/// Falls back to `info` when the directive does not parse.
pub fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global tracing subscriber.
pub fn initialize_logging(directive: &str) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter(directive))
        .with(fmt_layer)
        .try_init()
        .map_err(|e| FrontendError::Logging {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_accepts_targets() {
        let filter = env_filter("fansapprove_web=debug,tower_http=info");
        assert!(filter.to_string().contains("fansapprove_web=debug"));
    }

    #[test]
    fn test_env_filter_falls_back_to_info() {
        let filter = env_filter("fansapprove_web=loud");
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn test_second_initialization_fails() {
        // Whichever call runs first in this process wins
        let _ = initialize_logging("warn");
        let second = initialize_logging("warn");
        assert!(matches!(second, Err(FrontendError::Logging { .. })));
    }
}
