//! Server entry point.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;

use super::{
    router::build_router,
    signal::shutdown_signal,
    state::{AppState, StateError},
};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Bind the configured address and serve until a shutdown signal arrives
pub async fn run(config: Config) -> Result<(), ServerError> {
    let state = Arc::new(AppState::from_config(&config)?);
    let addr = config.listen_addr();

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!("Listening on http://{}", addr);
    tracing::info!(
        "Lookup sources: {} | {}",
        state.source_a.base_url,
        state.source_b.base_url
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}
