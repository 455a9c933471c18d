//! Budget reports: plain text for terminals, standalone HTML for printing and
//! the JSON export document.

use std::{fmt::Write as _, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use evplan_core::BudgetSummary;
use evplan_domain::{BudgetResult, EventParameters};
use serde::Serialize;

use crate::{currency::CurrencyFormatter, errors::AppError};

const NOT_SET: &str = "N/A";

/// Output formats understood by `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Html,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
        }
    }

    /// `budget-estimate-<date>.<ext>`
    pub fn default_file_name(self, date: NaiveDate) -> String {
        format!("budget-estimate-{}.{}", date.format("%Y-%m-%d"), self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "html" | "htm" => Ok(ReportFormat::Html),
            "json" => Ok(ReportFormat::Json),
            other => Err(AppError::Usage(format!(
                "unknown report format `{other}` (expected text, html or json)"
            ))),
        }
    }
}

/// File name for a scenario comparison export.
pub fn comparison_file_name(date: NaiveDate) -> String {
    format!("budget-comparison-{}.json", date.format("%Y-%m-%d"))
}

/// Inputs, budget and headline figures of one estimate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub form_data: EventParameters,
    pub budget_data: BudgetResult,
    pub exported_at: DateTime<Utc>,
    pub summary: BudgetSummary,
}

impl ExportDocument {
    pub fn new(params: &EventParameters, result: &BudgetResult) -> Self {
        Self {
            form_data: params.clone(),
            budget_data: result.clone(),
            exported_at: Utc::now(),
            summary: BudgetSummary::from_result(result, params),
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Renders a report in the requested format.
pub fn render(
    format: ReportFormat,
    params: &EventParameters,
    result: &BudgetResult,
    currency: &CurrencyFormatter,
) -> Result<String, AppError> {
    match format {
        ReportFormat::Text => Ok(render_text(params, result, currency)),
        ReportFormat::Html => Ok(render_html(params, result, currency)),
        ReportFormat::Json => ExportDocument::new(params, result).to_json(),
    }
}

pub fn render_text(
    params: &EventParameters,
    result: &BudgetResult,
    currency: &CurrencyFormatter,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Event Budget Estimate");
    let _ = writeln!(out, "=====================");
    for (label, value) in details(params) {
        let _ = writeln!(out, "{label:<12}: {value}");
    }

    for (category, breakdown) in result.categories() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:<40}{:>14}",
            category.title(),
            currency.format(breakdown.total)
        );
        for item in &breakdown.items {
            let _ = writeln!(
                out,
                "  {:<22}{:<16}{:>14}",
                item.name,
                item.description,
                currency.format(item.cost)
            );
        }
    }

    let summary = BudgetSummary::from_result(result, params);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<40}{:>14}",
        "Total Cost",
        currency.format(result.grand_total)
    );
    let _ = writeln!(
        out,
        "Per guest: {}  Per hour: {}",
        currency.format_f64(summary.per_guest),
        currency.format_f64(summary.per_hour)
    );
    out
}

/// Standalone, printable HTML page.
pub fn render_html(
    params: &EventParameters,
    result: &BudgetResult,
    currency: &CurrencyFormatter,
) -> String {
    let mut out = String::new();
    out.push_str(HTML_HEAD);
    let _ = writeln!(
        out,
        "    <div class=\"header\">\n        <div class=\"title\">Event Budget Estimate</div>\n        <div>Generated on {}</div>\n    </div>",
        Utc::now().format("%d %b %Y")
    );
    let _ = writeln!(
        out,
        "    <div class=\"summary\">\n        <div>Total Estimated Cost</div>\n        <div class=\"total-cost\">{}</div>\n        <div>For {} guests &middot; {} hours</div>\n    </div>",
        escape(&currency.format(result.grand_total)),
        params.audience_size,
        params.duration_hours
    );

    out.push_str("    <div class=\"section-title\">Event Details</div>\n");
    for (label, value) in details(params) {
        let _ = writeln!(
            out,
            "    <div class=\"detail-row\"><span>{}:</span><span>{}</span></div>",
            label,
            escape(&value)
        );
    }

    out.push_str("    <div class=\"section-title\">Budget Breakdown</div>\n");
    for (category, breakdown) in result.categories() {
        let _ = writeln!(
            out,
            "    <div class=\"breakdown-item\"><span>{}:</span><span>{}</span></div>",
            escape(category.title()),
            escape(&currency.format(breakdown.total))
        );
        for item in &breakdown.items {
            let _ = writeln!(
                out,
                "    <div class=\"line-item\"><span>{} <small>{}</small></span><span>{}</span></div>",
                escape(&item.name),
                escape(&item.description),
                escape(&currency.format(item.cost))
            );
        }
    }
    let _ = writeln!(
        out,
        "    <div class=\"breakdown-item breakdown-total\"><span>Total Cost:</span><span>{}</span></div>",
        escape(&currency.format(result.grand_total))
    );
    out.push_str("</body>\n</html>\n");
    out
}

fn details(params: &EventParameters) -> Vec<(&'static str, String)> {
    let or_na = |value: Option<&str>| value.unwrap_or(NOT_SET).to_string();
    vec![
        ("Event Type", or_na(params.event_code())),
        ("City", or_na(params.city_code())),
        ("Venue", or_na(params.venue_code())),
        ("Catering", or_na(params.catering_code())),
        ("Guests", params.audience_size.to_string()),
        ("Duration", format!("{} hours", params.duration_hours)),
    ]
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Event Budget Estimate</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; color: #333; }
        .header { text-align: center; margin-bottom: 30px; border-bottom: 2px solid #2563EB; padding-bottom: 20px; }
        .title { color: #2563EB; font-size: 28px; font-weight: bold; margin-bottom: 10px; }
        .summary { background: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0; text-align: center; }
        .total-cost { font-size: 36px; font-weight: bold; color: #059669; margin: 10px 0; }
        .detail-row, .breakdown-item, .line-item { display: flex; justify-content: space-between; padding: 8px 0; }
        .detail-row { border-bottom: 1px solid #eee; }
        .line-item { padding-left: 20px; color: #555; }
        .section-title { font-size: 18px; font-weight: bold; color: #2563EB; margin: 20px 0 15px 0; }
        .breakdown-total { font-weight: bold; border-top: 2px solid #ddd; margin-top: 10px; padding-top: 10px; }
    </style>
</head>
<body>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<b>Tom & \"Jerry\"</b>"), "&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;");
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("HTML".parse::<ReportFormat>().ok(), Some(ReportFormat::Html));
        assert_eq!("txt".parse::<ReportFormat>().ok(), Some(ReportFormat::Text));
        assert!("pdf".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn file_names_carry_the_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).expect("date");
        assert_eq!(
            ReportFormat::Html.default_file_name(date),
            "budget-estimate-2025-03-09.html"
        );
        assert_eq!(comparison_file_name(date), "budget-comparison-2025-03-09.json");
    }
}
