//! orderdesk Configuration Management
//!
//! Loads [`AppConfig`] from built-in defaults, an optional TOML file and
//! `ORDERDESK__`-prefixed environment variables, in increasing priority.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{AppConfig, LoggingConfig, SeedConfig, SeedPolicy};
