//! Core configuration types and data structures

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Log levels accepted by `logging.level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Seed data configuration
    pub seed: SeedConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level emitted (trace, debug, info, warn, error)
    pub level: String,
}

/// How seed records that fail validation are treated at startup
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// Log and skip each invalid record, keep loading the rest
    #[default]
    BestEffort,
    /// Abort startup on the first invalid record
    Strict,
}

/// Seed data configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SeedConfig {
    /// JSON file with `users`, `items` and `orders` arrays; the built-in
    /// demo data is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub policy: SeedPolicy,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
