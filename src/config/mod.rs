pub mod model;

use std::path::PathBuf;
use thiserror::Error;

pub use model::{AppConfig, UiConfig, UserConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
}

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("esercizi-tui")
        .join("config.toml")
}

/// Load the configuration, falling back to defaults when no file exists.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents =
        std::fs::read_to_string(&path).map_err(|source| ConfigError::Read { path, source })?;
    let config: AppConfig = toml::from_str(&contents)?;
    Ok(config)
}
