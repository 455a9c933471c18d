use evplan_core::validate_expense;
use evplan_domain::CustomExpense;

use super::plan::parse_category;
use super::{parse_position, CommandDefinition};
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::session::ShellContext;

const USAGE: &str = "expense [list|add <name> <amount> <category> [description]|remove <n>|clear]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "expense",
        "Manage custom expenses added on top of the estimate",
        USAGE,
        cmd_expense,
    )]
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return list(context);
    };
    match action.to_ascii_lowercase().as_str() {
        "list" => list(context),
        "add" => add(context, rest),
        "remove" | "rm" => {
            let index = parse_position(rest.first(), "expense remove <n>")?;
            if index >= context.expenses.len() {
                return Err(CommandError::invalid(format!(
                    "no expense at position {}",
                    index + 1
                )));
            }
            let removed = context.expenses.remove(index);
            output::success(format!("Removed expense `{}`.", removed.name));
            Ok(())
        }
        "clear" => {
            context.expenses.clear();
            output::success("Custom expenses cleared.");
            Ok(())
        }
        other => Err(CommandError::invalid(format!(
            "unknown expense action `{other}`; usage: {USAGE}"
        ))),
    }
}

fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [name, amount, category, description @ ..] = args else {
        return Err(CommandError::invalid(
            "usage: expense add <name> <amount> <category> [description]",
        ));
    };
    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|_| CommandError::invalid(format!("invalid amount `{amount}`")))?;
    let expense = CustomExpense::new(*name, amount, parse_category(category)?)
        .with_description(description.join(" "));
    validate_expense(&expense)?;
    output::success(format!(
        "Added {} to {} as `{}`.",
        context.currency.format_f64(expense.amount),
        expense.category,
        expense.name
    ));
    context.expenses.push(expense);
    Ok(())
}

fn list(context: &ShellContext) -> CommandResult {
    if context.expenses.is_empty() {
        output::info("No custom expenses.");
        return Ok(());
    }
    output::section("Custom expenses");
    for (idx, expense) in context.expenses.iter().enumerate() {
        output::line(format!(
            "  {:>2}. {:<24} {:<14} {:>12}  {}",
            idx + 1,
            expense.name,
            expense.category,
            context.currency.format_f64(expense.amount),
            expense.description
        ));
    }
    Ok(())
}
