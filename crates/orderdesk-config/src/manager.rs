//! Configuration manager implementation

use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat};
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    types::{AppConfig, LOG_LEVELS},
};

/// Configuration manager
pub struct ConfigManager {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a manager that reads only defaults and the environment
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: "ORDERDESK".to_string(),
        }
    }

    /// Create with a TOML config file; a missing file is an error
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: Some(path),
            ..Self::new()
        }
    }

    /// Override the environment prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load and validate the configuration
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut builder = Config::builder();
        if let Some(path) = &self.config_path {
            debug!(path = %path.display(), "Loading config file");
            builder = builder.add_source(File::from(path.clone()).format(FileFormat::Toml));
        }
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .prefix_separator("__")
                .separator("__"),
        );

        let app_config: AppConfig = builder.build()?.try_deserialize()?;
        self.validate_config(&app_config)?;
        Ok(app_config)
    }

    pub fn validate_config(&self, config: &AppConfig) -> Result<()> {
        let level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}', expected one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
