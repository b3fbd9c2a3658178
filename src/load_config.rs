use crate::config::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{error, info};

pub const BASE_URL_ENV: &str = "STATBLOCK_BASE_URL";
pub const TIMEOUT_ENV: &str = "STATBLOCK_TIMEOUT_SECS";

/// Loads the optional YAML config file, then applies environment overrides.
///
/// Without a path the defaults are used as the starting point. Missing fields
/// in the file fall back to their defaults.
pub fn load_config<P: AsRef<Path>>(path: Option<P>) -> Result<Config> {
    let mut config = match path {
        Some(path) => read_config_file(path.as_ref())?,
        None => {
            info!("No config file given, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    config.trace_loaded();
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<Config> {
    info!(config_path = ?path, "Loading configuration from file");

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            error!(error = ?e, config_path = ?path, "Failed to read config file");
            return Err(anyhow::anyhow!("Failed to read config file {:?}: {}", path, e));
        }
    };

    // An empty file is a valid, all-defaults config.
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    match serde_yaml::from_str::<Config>(&content) {
        Ok(config) => {
            info!(config_path = ?path, "Parsed config YAML successfully");
            Ok(config)
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path, "Failed to parse config YAML");
            Err(anyhow::anyhow!("Failed to parse config YAML: {e}"))
        }
    }
}

fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
        info!(base_url = %base_url, "{BASE_URL_ENV} found in env");
        config.base_url = base_url;
    }

    if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
        config.timeout_secs = raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{TIMEOUT_ENV} must be a valid integer, got {raw:?}"))?;
        info!(timeout_secs = config.timeout_secs, "{TIMEOUT_ENV} found in env");
    }

    Ok(())
}
