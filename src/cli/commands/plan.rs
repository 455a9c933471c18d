use evplan_core::{
    category_shares, find_template, suggested_budget, validate_expense, validate_parameters,
    PlanningState, PricingTable,
};
use evplan_domain::{BudgetCategory, BudgetResult, BudgetUpdate, CustomExpense, EventParameters};

use super::CommandDefinition;
use crate::cli::args::{split_list, ParsedArgs};
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::session::ShellContext;
use crate::report::{render_text, ExportDocument};

/// Options that edit the budget form before a command runs.
pub(crate) const FORM_FLAGS: &[&str] = &[
    "template", "city", "event", "venue", "catering", "guests", "duration", "setup", "cleanup",
    "service", "services",
];

const CALC_USAGE: &str = "calc [--city <code>] [--event <code>] [--venue <code>] [--catering <code>] \
[--guests <n>] [--duration <h>] [--setup <h>] [--cleanup <h>] [--service <code>]... \
[--template <id>] [--expense <name:amount:category>]... [--strict] [--json]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "calc",
            "Calculate the budget for the current event",
            CALC_USAGE,
            cmd_calc,
        ),
        CommandDefinition::new(
            "set",
            "Change one field of the budget form",
            "set <city|event|venue|catering|guests|duration|setup|cleanup|services|requirements> <value>",
            cmd_set,
        ),
        CommandDefinition::new("show", "Show the planning forms", "show", cmd_show),
        CommandDefinition::new(
            "reset",
            "Clear the forms and custom expenses",
            "reset",
            cmd_reset,
        ),
        CommandDefinition::new(
            "pricing",
            "List the price tables in use",
            "pricing [cities|venues|catering|services]",
            cmd_pricing,
        ),
    ]
}

fn cmd_calc(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = ParsedArgs::parse(args, &["strict", "json"]);
    let known: Vec<&str> = FORM_FLAGS
        .iter()
        .copied()
        .chain(["expense", "strict", "json"])
        .collect();
    parsed.ensure_known(&known)?;
    if let Some(extra) = parsed.positional().first() {
        return Err(CommandError::invalid(format!(
            "unexpected argument `{extra}`; usage: {CALC_USAGE}"
        )));
    }

    let extra = parsed
        .values("expense")
        .into_iter()
        .map(parse_expense_spec)
        .collect::<Result<Vec<_>, _>>()?;
    extra.iter().try_for_each(validate_expense)?;
    let staged = staged_form(context, &parsed)?;
    if parsed.has("strict") || context.config.strict_validation {
        validate_parameters(&staged.budget_parameters())?;
    }
    context.planning = staged;

    let params = context.planning.budget_parameters();
    warn_incomplete(&params);
    context.warn_unknown_codes(&params);
    let (params, result) = context.estimate(parsed.has("strict"), &extra)?;

    if parsed.has("json") {
        output::line(ExportDocument::new(&params, &result).to_json()?);
    } else {
        print_estimate(context, &params, &result);
    }
    Ok(())
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (field, rest) = args.split_first().ok_or_else(|| {
        CommandError::invalid("usage: set <field> <value>; see `help set` for fields")
    })?;
    let value = rest.join(" ");
    let value = value.trim();
    let mut update = BudgetUpdate::default();
    match field.to_ascii_lowercase().as_str() {
        "city" => update.city = Some(value.to_string()),
        "event" | "event-type" => update.event_type = Some(value.to_string()),
        "venue" | "venue-type" => update.venue_type = Some(value.to_string()),
        "catering" | "catering-type" => update.catering_type = Some(value.to_string()),
        "guests" | "audience" => update.audience_size = Some(parse_number(field, value)?),
        "duration" => update.duration = Some(parse_number(field, value)?),
        "setup" => update.setup_time = Some(parse_number(field, value)?),
        "cleanup" => update.cleanup_time = Some(parse_number(field, value)?),
        "services" => update.additional_services = Some(parse_services(value)),
        "requirements" => update.special_requirements = Some(value.to_string()),
        other => {
            return Err(CommandError::invalid(format!(
                "unknown budget field `{other}`"
            )))
        }
    }
    context.planning.update_budget(update);
    output::success(format!("Updated {field}."));
    Ok(())
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let budget = &context.planning.budget;
    output::section("Budget form");
    let services = if budget.additional_services.is_empty() {
        "-".to_string()
    } else {
        budget.additional_services.join(", ")
    };
    for (label, value) in [
        ("City", budget.city.clone()),
        ("Event type", budget.event_type.clone()),
        ("Venue type", budget.venue_type.clone()),
        ("Catering", budget.catering_type.clone()),
        ("Guests", budget.audience_size.to_string()),
        ("Duration", format!("{} h", budget.duration)),
        ("Setup", format!("{} h", budget.setup_time)),
        ("Cleanup", format!("{} h", budget.cleanup_time)),
        ("Services", services),
        ("Requirements", budget.special_requirements.clone()),
    ] {
        output::line(format!("  {label:<14} {}", display_or_dash(&value)));
    }
    if budget.is_ready() {
        output::info("The budget form is complete.");
    } else {
        output::hint("Fill in city, event type, venue type and catering to complete the form.");
    }

    let dashboard = &context.planning.dashboard;
    output::section("Dashboard");
    for (label, value) in [
        ("Event name", dashboard.event_name.clone()),
        ("Event type", dashboard.event_type.clone()),
        ("City", dashboard.city.clone()),
        ("Venue", dashboard.venue.clone()),
        ("Date", dashboard.date.clone()),
        ("Time", dashboard.time.clone()),
        ("Guests", dashboard.audience_size.to_string()),
        ("Budget", context.currency.format(dashboard.budget)),
    ] {
        output::line(format!("  {label:<14} {}", display_or_dash(&value)));
    }
    if let Some(suggested) = suggested_budget(&context.pricing, &dashboard.city) {
        output::line(format!(
            "  {:<14} {}",
            "Suggested",
            context.currency.format(suggested)
        ));
    }

    if !context.expenses.is_empty() {
        output::info(format!(
            "{} custom expense(s) are added to every estimate.",
            context.expenses.len()
        ));
    }
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.planning = Default::default();
    context.expenses.clear();
    output::success("Forms and custom expenses cleared.");
    Ok(())
}

fn cmd_pricing(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let tables = match args.first().map(|arg| arg.to_ascii_lowercase()) {
        None => vec![
            PricingTable::City,
            PricingTable::Venue,
            PricingTable::Catering,
            PricingTable::Service,
        ],
        Some(name) => vec![match name.as_str() {
            "cities" | "city" => PricingTable::City,
            "venues" | "venue" => PricingTable::Venue,
            "catering" => PricingTable::Catering,
            "services" | "service" => PricingTable::Service,
            other => {
                return Err(CommandError::invalid(format!(
                    "unknown price table `{other}`"
                )))
            }
        }],
    };

    output::info(format!("Price list version {}", context.pricing.version));
    for table in tables {
        let (title, entries) = match table {
            PricingTable::City => ("City multipliers", &context.pricing.city_multipliers),
            PricingTable::Venue => ("Venue base cost", &context.pricing.venue_costs),
            PricingTable::Catering => ("Catering per person", &context.pricing.catering_costs),
            PricingTable::Service => ("Service cost", &context.pricing.service_costs),
        };
        output::section(title);
        for (code, value) in entries {
            let shown = if table == PricingTable::City {
                format!("x{value}")
            } else {
                context.currency.format_f64(*value)
            };
            output::line(format!("  {code:<20} {shown:>10}"));
        }
    }
    Ok(())
}

/// Budget form with `--template` applied first and the individual form flags on top.
/// The session form is left untouched; callers commit the result once every
/// other argument has been accepted.
pub(crate) fn staged_form(
    context: &ShellContext,
    parsed: &ParsedArgs<'_>,
) -> Result<PlanningState, CommandError> {
    let template = match parsed.value("template")? {
        Some(id) => Some(
            find_template(id)
                .ok_or_else(|| CommandError::invalid(format!("unknown template `{id}`")))?,
        ),
        None => None,
    };

    let mut services: Option<Vec<String>> = None;
    for raw in parsed
        .values("service")
        .into_iter()
        .chain(parsed.values("services"))
    {
        services.get_or_insert_with(Vec::new).extend(parse_services(raw));
    }

    let update = BudgetUpdate {
        city: parsed.value("city")?.map(str::to_string),
        event_type: parsed.value("event")?.map(str::to_string),
        venue_type: parsed.value("venue")?.map(str::to_string),
        catering_type: parsed.value("catering")?.map(str::to_string),
        audience_size: parsed.parsed("guests")?,
        duration: parsed.parsed("duration")?,
        setup_time: parsed.parsed("setup")?,
        cleanup_time: parsed.parsed("cleanup")?,
        additional_services: services,
        special_requirements: None,
    };

    let mut staged = context.planning.clone();
    if let Some(template) = template {
        staged.update_budget(template.values);
    }
    if update != BudgetUpdate::default() {
        staged.update_budget(update);
    }
    Ok(staged)
}

/// Parses `name:amount:category`, e.g. `Decor:2500:venue`.
pub(crate) fn parse_expense_spec(spec: &str) -> Result<CustomExpense, CommandError> {
    let invalid = || {
        CommandError::invalid(format!(
            "invalid expense `{spec}` (expected name:amount:category)"
        ))
    };
    let mut parts = spec.rsplitn(3, ':');
    let category = parts.next().ok_or_else(invalid)?;
    let amount = parts.next().ok_or_else(invalid)?;
    let name = parts.next().ok_or_else(invalid)?;
    let category = parse_category(category)?;
    let amount: f64 = amount.trim().parse().map_err(|_| invalid())?;
    Ok(CustomExpense::new(name.trim(), amount, category))
}

pub(crate) fn parse_category(raw: &str) -> Result<BudgetCategory, CommandError> {
    BudgetCategory::from_code(raw).ok_or_else(|| {
        CommandError::invalid(format!(
            "unknown category `{raw}` (use venue, catering, services or misc)"
        ))
    })
}

pub(crate) fn print_estimate(context: &ShellContext, params: &EventParameters, result: &BudgetResult) {
    output::line(render_text(params, result, &context.currency));
    let shares = category_shares(result);
    if !shares.is_empty() {
        let parts: Vec<String> = shares
            .iter()
            .map(|share| format!("{} {:.1}%", share.category, share.percentage))
            .collect();
        output::line(format!("Shares: {}", parts.join(", ")));
    }
}

pub(crate) fn warn_incomplete(params: &EventParameters) {
    let missing = params.missing_fields();
    if !missing.is_empty() {
        output::warning(format!(
            "Missing required fields: {}. The estimate stays at zero until they are set.",
            missing.join(", ")
        ));
    }
}

fn parse_services(raw: &str) -> Vec<String> {
    if raw.trim().eq_ignore_ascii_case("none") {
        return Vec::new();
    }
    split_list(raw).collect()
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, CommandError> {
    value
        .parse()
        .map_err(|_| CommandError::invalid(format!("invalid number `{value}` for {field}")))
}

fn display_or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_spec_allows_colons_in_names() {
        let expense = parse_expense_spec("Stage: lights:2500:venue").expect("expense");
        assert_eq!(expense.name, "Stage: lights");
        assert_eq!(expense.amount, 2500.0);
        assert_eq!(expense.category, BudgetCategory::Venue);
    }

    #[test]
    fn expense_spec_rejects_bad_parts() {
        assert!(parse_expense_spec("Decor:lots:venue").is_err());
        assert!(parse_expense_spec("Decor:100:garden").is_err());
        assert!(parse_expense_spec("Decor").is_err());
    }

    #[test]
    fn none_clears_services() {
        assert!(parse_services("none").is_empty());
        assert_eq!(parse_services("music,flowers"), ["music", "flowers"]);
    }
}
