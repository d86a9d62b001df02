//! `pet-store` binary: parse configuration, start the pet actor and serve the REST API
//! until Ctrl-C.

use actor_framework::tracing::setup_tracing;
use anyhow::Context;
use clap::Parser;
use pet_store::api::build_router;
use pet_store::config::Config;
use pet_store::lifecycle::PetSystem;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    setup_tracing(config.log_directive());

    let system = PetSystem::new(config.channel_capacity);
    let app = build_router(system.pet_client.clone());

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %listener.local_addr()?, "Pet store listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    info!("Application stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
