//! HTTP server: routes, shared state, startup.

pub mod chart;
pub mod pages;

use axum::{routing::get, Router};
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{backend::BackendClient, cli::Frontend, Clock, Result};

/// State shared by every request. Cloning is cheap: the HTTP client is
/// reference-counted internally and nothing here is mutable.
#[derive(Debug, Clone)]
pub struct AppState {
    pub backend: BackendClient,
    pub clock: Clock,
}

impl AppState {
    pub fn new(backend: BackendClient) -> Self {
        Self {
            backend,
            clock: Clock::System,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/players/{id}", get(pages::player_detail))
        .route("/health", get(pages::health))
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: Frontend) -> Result<()> {
    let backend = BackendClient::with_timeout(
        config.backend_url,
        Duration::from_secs(config.timeout_secs),
    )?;
    info!(backend = %backend.base(), "using sentiment backend");

    let app = router(AppState::new(backend));

    let listener = TcpListener::bind(config.bind).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
