//! Bakery Production Management Platform - Backend Server
//!
//! Tracks ingredients, dough production, finished products, purchases and
//! sales for a small bakery, and derives purchasing/production alerts.

use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bpm_backend::{create_app, AppState, Config, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bpm_server=debug,bpm_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Bakery Production Management Server");
    tracing::info!("Environment: {}", config.environment);

    // Open the entity store (seeds catalogs on first run)
    tracing::info!("Opening entity store at {}", config.storage.data_dir);
    let store = Store::open(&config.storage.data_dir)?;
    tracing::info!("Entity store ready");

    // Create application state
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
