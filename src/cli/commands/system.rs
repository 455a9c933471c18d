use super::CommandDefinition;
use crate::cli::core::{CliMode, CommandError, CommandResult};
use crate::cli::output;
use crate::cli::session::ShellContext;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("version", "Show build metadata", "version", cmd_version),
        CommandDefinition::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandDefinition::new(
            "shell",
            "Start the interactive planner shell",
            "shell",
            cmd_shell,
        ),
        CommandDefinition::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("EVPLAN {}", meta.version));
    output::line(format!("  CLI version  : {}", build_info::CLI_VERSION));
    output::line(format!(
        "  Build hash   : {} ({})",
        meta.git_hash, meta.git_status
    ));
    output::line(format!("  Built at     : {}", meta.timestamp));
    output::line(format!("  Target       : {}", meta.target));
    output::line(format!("  Profile      : {}", meta.profile));
    output::line(format!("  Rustc        : {}", meta.rustc));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let Some(command) = context.command(&name.to_ascii_lowercase()) else {
            return Err(CommandError::invalid(format!("no help for `{name}`")));
        };
        output::section(format!("Help: {}", command.name));
        output::line(format!("  Description: {}", command.description));
        output::line(format!("  Usage: {}", command.usage));
        return Ok(());
    }

    output::section("Available commands");
    for command in context.registry.iter() {
        output::line(format!("  {:<12} {}", command.name, command.description));
    }
    output::hint("Use `help <command>` for details.");
    Ok(())
}

fn cmd_shell(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.mode {
        CliMode::Interactive => output::info("Already in the planner shell."),
        CliMode::Script => output::info("Reading commands from standard input."),
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
