use anyhow::Result;
use prediction_relay::{
    config::{self, RuntimeMode},
    inference::SageMakerClient,
    lambda,
    relay::PredictionRelay,
    server,
};
use std::sync::Arc;
use tracing::info;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))?,
        )
        .json()
        .init();

    info!(
        "Starting prediction relay for endpoint {} ({:?} mode, log level {})",
        config.sagemaker.endpoint_name, config.mode, log_level
    );

    let client = SageMakerClient::from_env(&config.sagemaker).await;
    let relay = Arc::new(PredictionRelay::new(&config.sagemaker, Arc::new(client)));

    match config.mode {
        RuntimeMode::Lambda => lambda::run(relay).await?,
        RuntimeMode::Server => server::run(config, relay).await?,
    }

    Ok(())
}
