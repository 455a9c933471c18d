use std::{fs, path::PathBuf};

use chrono::Utc;
use evplan_core::ScenarioBook;
use evplan_domain::{BudgetCategory, BudgetUpdate, EventParameters};

use super::plan::warn_incomplete;
use super::{parse_position, CommandDefinition};
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::session::ShellContext;
use crate::report::comparison_file_name;

const USAGE: &str = "scenario [list|add|select <n>|remove <n>|compare|export [file|dir]|clear]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "scenario",
        "Compare alternative setups side by side",
        USAGE,
        cmd_scenario,
    )]
}

fn cmd_scenario(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return list(context);
    };
    match action.to_ascii_lowercase().as_str() {
        "list" => list(context),
        "add" => add(context),
        "select" => select(context, rest),
        "remove" | "rm" => {
            let index = parse_position(rest.first(), "scenario remove <n>")?;
            let removed = context.scenarios.remove(index)?;
            output::success(format!("Removed {}.", removed.name));
            Ok(())
        }
        "compare" => compare(context),
        "export" => export(context, rest),
        "clear" => {
            context.scenarios = ScenarioBook::new(context.config.max_scenarios);
            output::success("Scenarios cleared.");
            Ok(())
        }
        other => Err(CommandError::invalid(format!(
            "unknown scenario action `{other}`; usage: {USAGE}"
        ))),
    }
}

fn add(context: &mut ShellContext) -> CommandResult {
    let params = context.planning.budget_parameters();
    if !params.is_complete() {
        warn_incomplete(&params);
        return Err(CommandError::invalid(
            "Please fill in all required fields before adding a scenario.",
        ));
    }
    let (params, result) = context.estimate(false, &[])?;
    let scenario = context.scenarios.add(params, result)?;
    let message = format!(
        "Added {} at {}.",
        scenario.name,
        context.currency.format(scenario.grand_total())
    );
    output::success(message);
    output::info(format!(
        "{} of {} scenario slots used.",
        context.scenarios.len(),
        context.scenarios.limit()
    ));
    Ok(())
}

/// Makes a scenario active and loads its inputs back into the budget form.
fn select(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let index = parse_position(args.first(), "scenario select <n>")?;
    let scenario = context.scenarios.select(index)?;
    let name = scenario.name.clone();
    let update = form_values(&scenario.params);
    context.planning.update_budget(update);
    output::success(format!("{name} is now active; its inputs are in the budget form."));
    Ok(())
}

fn list(context: &ShellContext) -> CommandResult {
    if context.scenarios.is_empty() {
        output::info("No scenarios yet. Use `scenario add` to store the current estimate.");
        return Ok(());
    }
    output::section("Scenarios");
    let active = context.scenarios.active_index();
    for (idx, scenario) in context.scenarios.scenarios().iter().enumerate() {
        let marker = if idx == active { "*" } else { " " };
        output::line(format!(
            "{marker} {:>2}. {:<12} {:<14} {:<18} {:>12}",
            idx + 1,
            scenario.name,
            scenario.params.city_code().unwrap_or("-"),
            scenario.params.venue_code().unwrap_or("-"),
            context.currency.format(scenario.grand_total())
        ));
    }
    Ok(())
}

fn compare(context: &ShellContext) -> CommandResult {
    let Some(insights) = context.scenarios.insights() else {
        output::info("No scenarios to compare.");
        return Ok(());
    };
    let currency = &context.currency;
    output::section("Scenario comparison");
    let mut header = format!("  {:<22}", "");
    for scenario in context.scenarios.scenarios() {
        header.push_str(&format!("{:>14}", scenario.name));
    }
    output::line(header);
    for category in BudgetCategory::ALL {
        let mut row = format!("  {:<22}", category.title());
        for scenario in context.scenarios.scenarios() {
            row.push_str(&format!(
                "{:>14}",
                currency.format(scenario.budget.category(category).total)
            ));
        }
        output::line(row);
    }
    let mut totals = format!("  {:<22}", "Total");
    for scenario in context.scenarios.scenarios() {
        totals.push_str(&format!("{:>14}", currency.format(scenario.grand_total())));
    }
    output::line(totals);

    output::line("");
    output::line(format!("  Lowest cost     {}", currency.format(insights.min_cost)));
    output::line(format!("  Highest cost    {}", currency.format(insights.max_cost)));
    output::line(format!("  Average cost    {}", currency.format(insights.avg_cost)));
    output::line(format!("  Potential saving {}", currency.format(insights.savings)));
    output::line(format!("  Cheapest        {}", insights.cheapest));
    Ok(())
}

fn export(context: &ShellContext, args: &[&str]) -> CommandResult {
    if context.scenarios.is_empty() {
        return Err(CommandError::invalid("No scenarios to export."));
    }
    let json = serde_json::to_string_pretty(&context.scenarios.comparison_export())?;
    match args.first() {
        None => output::line(json),
        Some(target) => {
            let mut path = PathBuf::from(target);
            if path.is_dir() {
                path.push(comparison_file_name(Utc::now().date_naive()));
            }
            fs::write(&path, json)?;
            output::success(format!("Exported comparison to {}", path.display()));
        }
    }
    Ok(())
}

fn form_values(params: &EventParameters) -> BudgetUpdate {
    let code = |value: &Option<String>| Some(value.clone().unwrap_or_default());
    BudgetUpdate {
        city: code(&params.city),
        audience_size: Some(params.audience_size),
        event_type: code(&params.event_type),
        venue_type: code(&params.venue_type),
        catering_type: code(&params.catering_type),
        duration: Some(params.duration_hours),
        setup_time: Some(params.setup_hours),
        cleanup_time: Some(params.cleanup_hours),
        additional_services: Some(params.additional_services.clone()),
        special_requirements: None,
    }
}
