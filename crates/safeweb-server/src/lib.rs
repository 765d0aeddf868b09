// SPDX-License-Identifier: Apache-2.0

//! HTTP front end for safeweb.
//!
//! Wraps `safeweb-core` in an axum router: a hostname-checked `/ping` route,
//! parameterised `/user` lookups and a `/health` check.

pub mod cli;
pub mod error;
pub mod logging;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{CredentialStatus, HealthResponse, PingResponse, router};
pub use state::AppState;

/// Run the HTTP server.
///
/// Binds to the given host and port and serves [`router`]. Gracefully shuts
/// down on Ctrl+C.
pub async fn run_http(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    // Handle both IPv4 and IPv6 addresses
    let addr: SocketAddr = if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
    .parse()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl+C: {e}");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received Ctrl+C, shutting down gracefully");
        })
        .await?;

    Ok(())
}
