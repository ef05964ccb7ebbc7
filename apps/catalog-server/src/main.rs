//! Reelbook catalog server binary.

use std::net::SocketAddr;

use catalog_server::{config::Config, create_app, create_state, init_tracing};
use catalog_store::{MemoryFilmStore, MemoryUserStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(&config.log_level);

    tracing::info!(
        popular_default_count = config.popular_default_count,
        "Starting Reelbook catalog server"
    );

    let state = create_state(config.clone(), MemoryUserStore::new(), MemoryFilmStore::new());
    let app = create_app(state);

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(addr = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
