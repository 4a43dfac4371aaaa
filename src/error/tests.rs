//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod frontend_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Nothing listens on port 9 of the loopback interface
        let client = reqwest::Client::new();
        let result = client.get("http://127.0.0.1:9/players").send().await;
        let reqwest_error = result.unwrap_err();
        let error = FrontendError::from(reqwest_error);

        match error {
            FrontendError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::AddrInUse, "Address in use");
        let error = FrontendError::from(io_error);

        match error {
            FrontendError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_backend_url_message() {
        let error = FrontendError::InvalidBackendUrl {
            url: "mailto:someone".to_string(),
            reason: "unsupported scheme".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("mailto:someone"));
        assert!(message.contains("unsupported scheme"));
    }

    #[test]
    fn test_invalid_player_id_message() {
        let error = FrontendError::InvalidPlayerId {
            id: "  ".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid player ID: \"  \"");
    }

    #[test]
    fn test_logging_error_message() {
        let error = FrontendError::Logging {
            message: "global default already set".to_string(),
        };
        assert!(error.to_string().starts_with("Logging setup failed"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<FrontendError>();
    }
}
