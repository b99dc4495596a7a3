//! Movie feed endpoint for cinescope.
//!
//! Serves `GET /?type=trending|top_rated|movies|series|search` and answers
//! with normalized movie records fetched from TMDB.

/// Feed query parameter parsing.
pub mod request;
mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use cinescope_api::tmdb::TmdbApi;

pub use routes::build_router;

/// Shared state of the feed endpoint.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ProxyState<T> {
    /// Upstream client; `None` when no TMDB token is configured.
    tmdb: Option<T>,
    /// TMDB response language (e.g. `en-US`).
    language: String,
}

impl<T> ProxyState<T> {
    /// Creates the endpoint state.
    pub fn new(tmdb: Option<T>, language: impl Into<String>) -> Self {
        Self {
            tmdb,
            language: language.into(),
        }
    }
}

/// Serves the feed endpoint on `listener` until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve<T>(listener: TcpListener, state: ProxyState<T>) -> Result<()>
where
    T: TmdbApi + Send + Sync + 'static,
{
    let addr = listener
        .local_addr()
        .context("failed to read listener address")?;
    tracing::info!(%addr, "feed endpoint listening");

    axum::serve(listener, build_router(Arc::new(state)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("feed server failed")
}

/// Resolves when Ctrl-C is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
