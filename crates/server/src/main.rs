mod bootstrap;
mod customers;
mod health;

use anyhow::Result;
use clientele_core::config::{AppConfig, LoadOptions};

fn init_logging(config: &AppConfig) {
    use clientele_core::config::LogFormat::*;
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

    let app = bootstrap::bootstrap_with_config(config).await?;

    let address = format!("{}:{}", app.config.server.bind_address, app.config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!(
        event_name = "system.server.started",
        bind_address = %address,
        seeded_records = app.seeded_records,
        "clientele-server started"
    );

    let router = customers::router(app.repository.clone())
        .merge(health::router(app.repository.clone()));

    let grace_secs = app.config.server.graceful_shutdown_secs;
    axum::serve(listener, router).with_graceful_shutdown(wait_for_shutdown(grace_secs)).await?;

    tracing::info!(event_name = "system.server.stopped", "clientele-server stopped");
    Ok(())
}

async fn wait_for_shutdown(grace_secs: u64) {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!(
            event_name = "system.server.signal_error",
            "shutdown signal listener failed"
        );
        return;
    }

    tracing::info!(
        event_name = "system.server.stopping",
        grace_secs,
        "shutdown signal received, draining in-flight requests"
    );
}
