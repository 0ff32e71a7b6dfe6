//! Tally Server entrypoint.

use std::sync::Arc;
use tally_server::config::Config;
use tally_server::state::{AppState, Stores};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!(
        "Starting Tally Server on {}:{} ({})",
        config.host,
        config.port,
        config.environment
    );

    // Open the collection stores
    let stores = Stores::open(&config.data_dir)?;
    tracing::info!(
        materials = stores.materials.snapshot().await.len(),
        movements = stores.movements.snapshot().await.len(),
        users = stores.users.snapshot().await.len(),
        component_changes = stores.changes.snapshot().await.len(),
        "Collections loaded"
    );

    let state = AppState {
        stores: Arc::new(stores),
        config: Arc::new(config.clone()),
    };

    let app = tally_server::app(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
