use std::sync::Arc;

use anyhow::{Context, Result};
use smogcast_server::config::ServerConfig;
use smogcast_server::{router, ServerState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;

    // No traffic is served unless both artifacts load.
    let state = ServerState::load(&config).context("failed to load model artifacts")?;
    let app = router(Arc::new(state));

    let addr = config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
