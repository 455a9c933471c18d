use evplan_core::{storage::PreferencesStore, suggested_budget};
use evplan_domain::{DashboardUpdate, EventPreferences};

use super::CommandDefinition;
use crate::cli::args::split_list;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::session::ShellContext;

const USAGE: &str = "prefs [show|save|load|set <field> <value>]";
const FIELDS: &str = "name, event, city, venue, venue-type, guests, budget, date, time, duration, \
location, description, functions";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "prefs",
        "Edit, save and load the event preferences shared by both forms",
        USAGE,
        cmd_prefs,
    )]
}

fn cmd_prefs(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return show(context);
    };
    match action.to_ascii_lowercase().as_str() {
        "show" => show(context),
        "save" => save(context),
        "load" => match context.store.latest_preferences()? {
            Some(prefs) => {
                context.planning.apply_preferences(&prefs);
                output::success("Saved preferences loaded into both forms.");
                Ok(())
            }
            None => {
                output::info("No saved preferences yet.");
                Ok(())
            }
        },
        "set" => set(context, rest),
        other => Err(CommandError::invalid(format!(
            "unknown prefs action `{other}`; usage: {USAGE}"
        ))),
    }
}

fn show(context: &ShellContext) -> CommandResult {
    let Some(prefs) = context.store.latest_preferences()? else {
        output::info("No saved preferences yet. Use `prefs set <field> <value>` to create them.");
        return Ok(());
    };
    output::section("Saved preferences");
    print_preferences(context, &prefs);
    Ok(())
}

fn save(context: &ShellContext) -> CommandResult {
    let prefs = context.planning.shared_preferences();
    context.store.save_preferences(&prefs)?;
    output::success(format!(
        "Preferences saved to {}",
        context.store.preferences_path().display()
    ));
    Ok(())
}

/// Updates one dashboard field, mirrors it to the budget form and saves.
fn set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (field, rest) = args.split_first().ok_or_else(|| {
        CommandError::invalid(format!("usage: prefs set <field> <value>; fields: {FIELDS}"))
    })?;
    let value = rest.join(" ");
    let value = value.trim().to_string();
    let mut update = DashboardUpdate::default();
    match field.to_ascii_lowercase().as_str() {
        "name" => update.event_name = Some(value),
        "event" | "event-type" => update.event_type = Some(value),
        "city" => {
            if context.planning.dashboard.budget == 0 {
                update.budget = suggested_budget(&context.pricing, &value);
            }
            update.city = Some(value);
        }
        "venue" => update.venue = Some(value),
        "venue-type" => update.venue_type = Some(value),
        "guests" | "audience" => update.audience_size = Some(parse(field, &value)?),
        "budget" => update.budget = Some(parse(field, &value)?),
        "duration" => update.duration = Some(parse(field, &value)?),
        "date" => update.date = Some(value),
        "time" => update.time = Some(value),
        "location" => update.location = Some(value),
        "description" => update.description = Some(value),
        "functions" => update.selected_functions = Some(split_list(&value).collect()),
        other => {
            return Err(CommandError::invalid(format!(
                "unknown preference `{other}`; fields: {FIELDS}"
            )))
        }
    }
    if let Some(budget) = update.budget.filter(|_| field.eq_ignore_ascii_case("city")) {
        output::info(format!(
            "Suggested budget for this city: {}",
            context.currency.format(budget)
        ));
    }
    context.planning.update_dashboard(update);
    save(context)
}

fn print_preferences(context: &ShellContext, prefs: &EventPreferences) {
    let or_dash = |value: &str| {
        if value.trim().is_empty() {
            "-".to_string()
        } else {
            value.to_string()
        }
    };
    output::line(format!("  {:<12} {}", "Event type", or_dash(&prefs.event_type)));
    output::line(format!("  {:<12} {}", "City", or_dash(&prefs.city)));
    output::line(format!("  {:<12} {}", "Venue", or_dash(&prefs.venue)));
    output::line(format!(
        "  {:<12} {}",
        "Guests",
        prefs
            .number_of_people
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".into())
    ));
    output::line(format!(
        "  {:<12} {}",
        "Budget",
        prefs
            .budget
            .map(|amount| context.currency.format(amount))
            .unwrap_or_else(|| "-".into())
    ));
    output::line(format!("  {:<12} {}", "Date", or_dash(&prefs.event_date)));
    output::line(format!("  {:<12} {}", "Time", or_dash(&prefs.event_time)));
    output::line(format!(
        "  {:<12} {}",
        "Functions",
        or_dash(&prefs.selected_functions.join(", "))
    ));
}

fn parse<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, CommandError> {
    value
        .parse()
        .map_err(|_| CommandError::invalid(format!("invalid number `{value}` for {field}")))
}
