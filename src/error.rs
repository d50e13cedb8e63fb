use thiserror::Error;

/// Errors surfaced by the library.
#[derive(Error, Debug)]
pub enum ClockError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize clock state: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClockError>;
