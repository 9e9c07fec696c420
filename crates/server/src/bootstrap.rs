use std::sync::Arc;
use std::time::Duration;

use fuzzyrec_core::config::{AppConfig, ConfigError, LoadOptions};
use fuzzyrec_core::Recommender;
use fuzzyrec_store::{catalog, connection, StoreError};
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub recommender: Arc<Recommender>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("store connection failed: {0}")]
    StoreConnect(#[source] StoreError),
    #[error("affinity snapshot load failed: {0}")]
    SnapshotLoad(#[source] StoreError),
}

pub async fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config).await
}

/// Connect to the store, load the affinity snapshot and build the
/// recommender. Any failure here is fatal: without a snapshot there is
/// nothing to serve.
pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        store_url = %config.store.url,
        "starting application bootstrap"
    );

    let mut conn = connection::connect(
        &config.store.url,
        Duration::from_secs(config.store.connect_timeout_secs),
    )
    .await
    .map_err(BootstrapError::StoreConnect)?;
    info!(event_name = "system.bootstrap.store_connected", "affinity store connection established");

    let snapshot =
        catalog::load_snapshot(&mut conn, &config.store).await.map_err(BootstrapError::SnapshotLoad)?;
    info!(
        event_name = "system.bootstrap.snapshot_loaded",
        items = snapshot.items().len(),
        profiles = snapshot.profiles().len(),
        "affinity snapshot loaded"
    );

    let recommender = Arc::new(Recommender::new(Arc::new(snapshot)));
    Ok(Application { config, recommender })
}
