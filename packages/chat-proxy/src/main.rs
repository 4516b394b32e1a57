//! Chat Proxy binary
//!
//! Serves `POST /api/chat` and forwards it to `BACKEND_URL`.

use anyhow::Result;
use chat_proxy::ProxyConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting chat proxy");

    let config = ProxyConfig::load()?;
    chat_proxy::run(config).await
}
