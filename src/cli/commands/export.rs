use std::{fs, path::PathBuf};

use chrono::Utc;

use super::plan::{staged_form, warn_incomplete, FORM_FLAGS};
use super::CommandDefinition;
use crate::cli::args::ParsedArgs;
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::session::ShellContext;
use crate::report::{render, ReportFormat};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "export",
        "Export the current estimate as text, HTML or JSON",
        "export [text|html|json] [--output <file|dir>] [form options as for calc]",
        cmd_export,
    )]
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = ParsedArgs::parse(args, &[]);
    let known: Vec<&str> = FORM_FLAGS.iter().copied().chain(["output"]).collect();
    parsed.ensure_known(&known)?;
    let format = match parsed.positional() {
        [] => ReportFormat::Text,
        [name] => name.parse::<ReportFormat>()?,
        [_, extra, ..] => {
            return Err(CommandError::invalid(format!("unexpected argument `{extra}`")))
        }
    };

    let target = parsed.value("output")?;
    let staged = staged_form(context, &parsed)?;
    let params = staged.budget_parameters();
    if !params.is_complete() {
        warn_incomplete(&params);
        return Err(CommandError::invalid(
            "Please fill in all required fields before exporting.",
        ));
    }
    context.planning = staged;
    context.warn_unknown_codes(&params);
    let (params, result) = context.estimate(false, &[])?;
    let body = render(format, &params, &result, &context.currency)?;

    match target {
        None => output::line(body.trim_end()),
        Some(target) => {
            let mut path = PathBuf::from(target);
            if path.is_dir() {
                path.push(format.default_file_name(Utc::now().date_naive()));
            }
            fs::write(&path, body)?;
            output::success(format!("Exported budget to {}", path.display()));
        }
    }
    Ok(())
}
