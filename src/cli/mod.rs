//! Command-line front end: one-shot commands and the interactive planner shell.

pub mod args;
pub mod commands;
pub mod core;
pub mod output;
pub mod session;
mod shell;

pub use shell::run_shell;

use self::core::{CliMode, CommandError, LoopControl};
use self::session::ShellContext;
use crate::errors::AppError;

/// Entry point for `evplan_cli`. With no arguments (or `shell`) the planner shell starts;
/// otherwise the arguments run as a single command.
pub fn run(args: &[String]) -> Result<(), AppError> {
    let Some((first, rest)) = args.split_first() else {
        return run_shell();
    };
    let command = match first.as_str() {
        "shell" => return run_shell(),
        "--help" | "-h" => "help".to_string(),
        "--version" | "-V" => "version".to_string(),
        other => other.to_ascii_lowercase(),
    };

    let mut context = ShellContext::new(CliMode::Script)?;
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    match context.dispatch(&command, first, &args) {
        Ok(LoopControl::Continue | LoopControl::Exit) => Ok(()),
        Err(CommandError::InvalidArguments(message)) => match context.command(&command) {
            Some(definition) => Err(AppError::Usage(format!(
                "{message}\nUsage: {}",
                definition.usage
            ))),
            None => Err(AppError::Usage(message)),
        },
        Err(err) => Err(err.into()),
    }
}
