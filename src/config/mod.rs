mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub const ENDPOINT_NAME_VAR: &str = "SAGEMAKER_ENDPOINT_NAME";
pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";
pub const LAMBDA_RUNTIME_API_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

/// Loads the optional YAML file named by `CONFIG_PATH`, then resolves the
/// endpoint name and runtime mode from the process environment.
pub async fn load() -> Result<Config> {
    let config = match env::var(CONFIG_PATH_VAR) {
        Ok(path) => read_file(&path).await?,
        Err(_) => Config::default(),
    };

    resolve(config, |key| env::var(key).ok())
}

pub async fn read_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

pub fn resolve<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let endpoint_name = lookup(ENDPOINT_NAME_VAR)
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| {
            Error::config(format!(
                "{} must name the target SageMaker endpoint",
                ENDPOINT_NAME_VAR
            ))
        })?;

    config.sagemaker.endpoint_name = endpoint_name;
    config.mode = if lookup(LAMBDA_RUNTIME_API_VAR).is_some() {
        RuntimeMode::Lambda
    } else {
        RuntimeMode::Server
    };

    Ok(config)
}
