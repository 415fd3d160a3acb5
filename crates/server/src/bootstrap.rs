use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use clientele_core::config::{AppConfig, ConfigError, LoadOptions};
use clientele_store::{fixtures, CustomerRepository, InMemoryCustomerRepository, SeedError};

pub struct Application {
    pub config: AppConfig,
    pub repository: Arc<dyn CustomerRepository>,
    pub seeded_records: usize,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("customer seed load failed: {0}")]
    Seed(#[source] SeedError),
}

pub async fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config).await
}

/// Builds the seeded application state. Whether a failure here aborts the
/// process is the caller's decision; nothing below `main` exits.
pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        seed_path = %config.seed.path.display(),
        "starting application bootstrap"
    );

    let records = fixtures::load_from_path(&config.seed.path).map_err(BootstrapError::Seed)?;
    let seeded_records = records.len();
    let repository: Arc<dyn CustomerRepository> =
        Arc::new(InMemoryCustomerRepository::with_records(records));

    info!(
        event_name = "system.bootstrap.store_seeded",
        seeded_records,
        "customer store seeded from fixtures"
    );

    Ok(Application { config, repository, seeded_records })
}
