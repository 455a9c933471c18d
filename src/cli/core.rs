//! Shared CLI result and control types.

use std::io;

use evplan_config::ConfigError;
use evplan_core::CoreError;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    App(#[from] AppError),
    #[error("exit requested")]
    ExitRequested,
}

impl CommandError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        CommandError::InvalidArguments(message.into())
    }
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        CommandError::App(AppError::Core(err))
    }
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        CommandError::App(AppError::Config(err))
    }
}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::App(AppError::Io(err))
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::App(AppError::Serde(err))
    }
}

impl From<CommandError> for AppError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::App(err) => err,
            CommandError::InvalidArguments(message) => AppError::Usage(message),
            CommandError::ExitRequested => AppError::Usage("exit requested".into()),
        }
    }
}
