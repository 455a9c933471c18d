use evplan_config::ConfigError;
use evplan_core::CoreError;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Top-level failure for the library surface and the CLI binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("{0}")]
    Usage(String),
}
