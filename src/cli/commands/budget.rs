use evplan_core::storage::PreferencesStore;
use evplan_domain::SavedBudget;

use super::plan::{print_estimate, warn_incomplete};
use super::CommandDefinition;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::session::ShellContext;

const USAGE: &str = "budget [list|save <name>|show <id>|delete <id>]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "budget",
        "Save the current estimate or browse saved budgets",
        USAGE,
        cmd_budget,
    )]
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return list(context);
    };
    match action.to_ascii_lowercase().as_str() {
        "list" => list(context),
        "save" => save(context, rest),
        "show" => {
            let saved = find(context, rest.first())?;
            output::section(format!("{} ({})", saved.name, short_id(&saved)));
            print_estimate(context, &saved.form_data, &saved.budget_data);
            Ok(())
        }
        "delete" | "rm" => {
            let saved = find(context, rest.first())?;
            context.store.delete_budget(saved.id)?;
            output::success(format!("Deleted saved budget `{}`.", saved.name));
            Ok(())
        }
        other => Err(CommandError::invalid(format!(
            "unknown budget action `{other}`; usage: {USAGE}"
        ))),
    }
}

fn save(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = args.join(" ");
    let name = name.trim();
    if name.is_empty() {
        return Err(CommandError::invalid("usage: budget save <name>"));
    }
    let params = context.planning.budget_parameters();
    if !params.is_complete() {
        warn_incomplete(&params);
        return Err(CommandError::invalid(
            "Please fill in all required fields before saving a budget.",
        ));
    }
    let (params, result) = context.estimate(false, &[])?;
    let saved = SavedBudget::new(name, params, result);
    context.store.save_budget(&saved)?;
    output::success(format!(
        "Saved `{}` ({}) at {}.",
        saved.name,
        short_id(&saved),
        context.currency.format(saved.budget_data.grand_total)
    ));
    Ok(())
}

fn list(context: &ShellContext) -> CommandResult {
    let budgets = context.store.list_saved_budgets()?;
    if budgets.is_empty() {
        output::info("No saved budgets.");
        return Ok(());
    }
    output::section("Saved budgets");
    for saved in budgets {
        output::line(format!(
            "  {}  {:<28} {:>12}  {}",
            short_id(&saved),
            saved.name,
            context.currency.format(saved.budget_data.grand_total),
            saved.created_at.format("%Y-%m-%d %H:%M")
        ));
    }
    Ok(())
}

/// Saved budget whose id starts with the given prefix.
fn find(context: &ShellContext, prefix: Option<&&str>) -> Result<SavedBudget, CommandError> {
    let prefix = prefix
        .map(|raw| raw.trim().to_ascii_lowercase())
        .filter(|raw| !raw.is_empty())
        .ok_or_else(|| CommandError::invalid("usage: budget show|delete <id>"))?;
    let mut matches: Vec<SavedBudget> = context
        .store
        .list_saved_budgets()?
        .into_iter()
        .filter(|saved| saved.id.simple().to_string().starts_with(&prefix))
        .collect();
    match matches.len() {
        0 => Err(CommandError::invalid(format!("no saved budget with id `{prefix}`"))),
        1 => Ok(matches.remove(0)),
        _ => Err(CommandError::invalid(format!(
            "id `{prefix}` matches several saved budgets; use more characters"
        ))),
    }
}

fn short_id(saved: &SavedBudget) -> String {
    let mut short = saved.id.simple().to_string();
    short.truncate(8);
    short
}
