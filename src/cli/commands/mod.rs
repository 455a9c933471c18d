use std::collections::HashMap;

pub mod budget;
pub mod config;
pub mod expense;
pub mod export;
pub mod plan;
pub mod prefs;
pub mod scenario;
pub mod system;
pub mod templates;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::session::ShellContext;

pub(crate) fn all_definitions() -> Vec<CommandDefinition> {
    let mut commands = Vec::new();
    commands.extend(plan::definitions());
    commands.extend(export::definitions());
    commands.extend(templates::definitions());
    commands.extend(expense::definitions());
    commands.extend(scenario::definitions());
    commands.extend(prefs::definitions());
    commands.extend(budget::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

#[derive(Clone)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandDefinition {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandDefinition>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandDefinition>) -> Self {
        let mut commands = HashMap::new();
        let mut order = Vec::new();
        for definition in definitions {
            order.push(definition.name);
            commands.insert(definition.name, definition);
        }
        Self { commands, order }
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.order
            .iter()
            .filter_map(move |name| self.commands.get(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }
}

/// 1-based list position from user input.
pub(crate) fn parse_position(raw: Option<&&str>, usage: &str) -> Result<usize, CommandError> {
    let raw = raw.ok_or_else(|| CommandError::invalid(format!("usage: {usage}")))?;
    match raw.trim().parse::<usize>() {
        Ok(position) if position >= 1 => Ok(position - 1),
        _ => Err(CommandError::invalid(format!(
            "`{raw}` is not a valid position (use the number shown in the list)"
        ))),
    }
}
