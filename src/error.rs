use thiserror::Error;

use crate::config::ConfigError;

/// Errors that end the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Event channel closed unexpectedly")]
    EventsClosed,
}
