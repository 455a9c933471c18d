use evplan_core::{find_template, templates, EventTemplate};
use strsim::jaro_winkler;

use super::plan::print_estimate;
use super::CommandDefinition;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::session::ShellContext;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "templates",
            "List quick-start event templates",
            "templates",
            cmd_templates,
        ),
        CommandDefinition::new(
            "template",
            "Apply a template to the budget form and show its estimate",
            "template <id>",
            cmd_template,
        ),
    ]
}

fn cmd_templates(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Templates");
    for template in templates() {
        output::line(format!("  {:<22} {:<22} {}", template.id, template.name, outline(&template)));
    }
    output::hint("Apply one with `template <id>`.");
    Ok(())
}

fn cmd_template(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = args
        .first()
        .ok_or_else(|| CommandError::invalid("usage: template <id>"))?;
    let Some(template) = find_template(id) else {
        let closest = templates()
            .into_iter()
            .map(|template| (jaro_winkler(template.id, &id.to_ascii_lowercase()), template.id))
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .filter(|(score, _)| *score >= 0.8);
        if let Some((_, suggestion)) = closest {
            output::hint(format!("Did you mean `{suggestion}`?"));
        }
        return Err(CommandError::invalid(format!("unknown template `{id}`")));
    };

    context.planning.update_budget(template.values.clone());
    output::success(format!("Applied template `{}` ({}).", template.id, template.name));
    let (params, result) = context.estimate(false, &[])?;
    print_estimate(context, &params, &result);
    Ok(())
}

fn outline(template: &EventTemplate) -> String {
    let values = &template.values;
    format!(
        "{} guests, {} h, {} in {}",
        values.audience_size.unwrap_or_default(),
        values.duration.unwrap_or_default(),
        values.venue_type.as_deref().unwrap_or("-"),
        values.city.as_deref().unwrap_or("-"),
    )
}
