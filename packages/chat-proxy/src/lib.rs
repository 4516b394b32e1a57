//! Chat Proxy - forwards the front-end's chat requests to the backend.
//!
//! The front-end only ever talks to `POST /api/chat` on this proxy; the
//! backend base URL stays server-side (`BACKEND_URL`).

pub mod config;
pub mod routes;
pub mod upstream;

pub use config::ProxyConfig;
pub use routes::router;
pub use upstream::{ForwardError, Upstream};

use anyhow::{Context, Result};
use tokio::net::TcpListener;

/// Bind the configured address and serve until Ctrl-C.
pub async fn run(config: ProxyConfig) -> Result<()> {
    let upstream = Upstream::new(&config.backend_url, config.timeout())
        .context("Failed to build upstream HTTP client")?;

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;

    tracing::info!(
        backend = %upstream.base_url(),
        "Chat proxy listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, router(upstream))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Chat proxy stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
