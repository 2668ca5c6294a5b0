// CLI error types

use orderdesk_config::ConfigError;
use orderdesk_domain::errors::DomainError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Seed data error: {0}")]
    Seed(String),

    #[error("Seeding failed: {0}")]
    Domain(#[from] DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Command failed")]
    CommandFailed,
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::Config(e) => format!(
                "{}\n\nCheck the file passed with --config and any ORDERDESK__* variables.",
                e
            ),
            CliError::Seed(msg) => format!(
                "Seed data error: {}\n\nA seed file is a JSON object with users, items and orders arrays.",
                msg
            ),
            CliError::Domain(e) => format!(
                "Seeding failed: {}\n\nRun without --strict-seed to skip invalid records instead.",
                e
            ),
            _ => self.to_string(),
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
