use evplan_config::CONFIG_KEYS;

use super::CommandDefinition;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::session::ShellContext;

const USAGE: &str =
    "config [show|get <key>|set <key> <value>|backup [note]|backups|restore <name>]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "config",
        "View and manage planner settings",
        USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return show(context);
    };
    match action.to_ascii_lowercase().as_str() {
        "show" => show(context),
        "get" => {
            let key = rest
                .first()
                .ok_or_else(|| CommandError::invalid("usage: config get <key>"))?;
            let value = context.config.get(key).ok_or_else(|| {
                CommandError::invalid(format!(
                    "unknown key `{key}`; keys: {}",
                    CONFIG_KEYS.join(", ")
                ))
            })?;
            output::line(value);
            Ok(())
        }
        "set" => set(context, rest),
        "backup" => {
            let note = rest.join(" ");
            let note = Some(note.trim()).filter(|note| !note.is_empty());
            let name = context.config_manager.backup(&context.config, note)?;
            output::success(format!("Configuration backed up as {name}"));
            Ok(())
        }
        "backups" => {
            let backups = context.config_manager.list_backups()?;
            if backups.is_empty() {
                output::info("No configuration backups.");
                return Ok(());
            }
            output::section("Configuration backups");
            for (idx, name) in backups.iter().enumerate() {
                output::line(format!("  {:>2}. {name}", idx + 1));
            }
            Ok(())
        }
        "restore" => {
            let name = rest
                .first()
                .ok_or_else(|| CommandError::invalid("usage: config restore <name>"))?;
            let restored = context.config_manager.restore(name)?;
            let previous = std::mem::replace(&mut context.config, restored);
            if let Err(err) = context.refresh_from_config() {
                context.config = previous;
                return Err(err);
            }
            context.persist_config()?;
            output::success(format!("Configuration restored from {name}"));
            Ok(())
        }
        other => Err(CommandError::invalid(format!(
            "unknown config action `{other}`; usage: {USAGE}"
        ))),
    }
}

fn show(context: &ShellContext) -> CommandResult {
    output::section("Configuration");
    for key in CONFIG_KEYS {
        let value = context.config.get(key).unwrap_or_default();
        output::line(format!("  {key:<20} {value}"));
    }
    output::line(format!(
        "  {:<20} {}",
        "(file)",
        context.config_manager.config_path().display()
    ));
    Ok(())
}

/// Applies one setting, keeping the old config when the session cannot use the new one.
fn set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [key, value @ ..] = args else {
        return Err(CommandError::invalid(format!(
            "usage: config set <key> <value>; keys: {}",
            CONFIG_KEYS.join(", ")
        )));
    };
    let value = value.join(" ");
    let mut updated = context.config.clone();
    updated.set(key, value.trim())?;

    let previous = std::mem::replace(&mut context.config, updated);
    if let Err(err) = context.refresh_from_config() {
        context.config = previous;
        context.refresh_from_config()?;
        return Err(err);
    }
    context.persist_config()?;
    output::success(format!(
        "{key} = {}",
        context.config.get(key).unwrap_or_default()
    ));
    Ok(())
}
