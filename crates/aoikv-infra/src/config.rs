//! Adapter configuration loader.
//!
//! Reads a `config.toml` and deserializes it into [`AdapterConfig`].
//! [`load_config_or_default`] falls back to defaults when the file is
//! missing or malformed.

use std::path::Path;

use aoikv_types::config::AdapterConfig;
use aoikv_types::error::ConfigError;

/// Load configuration from `path`, failing on unreadable or invalid files.
pub async fn load_config(path: &Path) -> Result<AdapterConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    toml::from_str::<AdapterConfig>(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`AdapterConfig::default()`].
/// - If the file cannot be read or parsed, logs a warning and returns the default.
pub async fn load_config_or_default(path: &Path) -> AdapterConfig {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        tracing::debug!(path = %path.display(), "no config found, using defaults");
        return AdapterConfig::default();
    }

    match load_config(path).await {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to load config, using defaults");
            AdapterConfig::default()
        }
    }
}

/// Returns the default database URL based on `AOIKV_DATA_DIR` env var,
/// falling back to `~/.aoikv/aoikv.db`.
pub fn default_database_url() -> String {
    let data_dir = std::env::var("AOIKV_DATA_DIR").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        format!("{home}/.aoikv")
    });
    format!("sqlite://{data_dir}/aoikv.db")
}
