mod bootstrap;
mod health;
mod routes;

use anyhow::Result;
use fuzzyrec_core::config::{AppConfig, LoadOptions};

fn init_logging(config: &AppConfig) {
    use fuzzyrec_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

pub async fn run() -> Result<()> {
    // Load config and initialize logging before any other operations
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    // Bootstrap using the same config we already loaded; a store failure here
    // is fatal, there is no service without a snapshot.
    let app = bootstrap::bootstrap_with_config(config).await?;

    let address = format!("{}:{}", app.config.server.bind_address, app.config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    let router = routes::router(app.recommender.clone()).merge(health::router(app.recommender.clone()));

    tracing::info!(
        event_name = "system.server.started",
        bind_address = %address,
        items = app.recommender.snapshot().items().len(),
        profiles = app.recommender.snapshot().profiles().len(),
        "fuzzyrec-server started"
    );

    axum::serve(listener, router).with_graceful_shutdown(wait_for_shutdown()).await?;

    tracing::info!(event_name = "system.server.stopping", "fuzzyrec-server stopping");

    Ok(())
}

async fn wait_for_shutdown() {
    let _ = tokio::signal::ctrl_c().await;
}
