//! Whole-unit currency formatting for budget figures.
//!
//! Budgets carry integer amounts, so no fraction digits are printed. The
//! `en-IN` locale groups digits the Indian way (`12,34,567`); other locales use
//! groups of three.

use evplan_config::Config;
use evplan_core::round_cost;

/// Formats amounts for one currency and locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    code: String,
    indian_grouping: bool,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new("INR", "en-IN")
    }
}

impl CurrencyFormatter {
    pub fn new(code: &str, locale: &str) -> Self {
        Self {
            code: code.trim().to_ascii_uppercase(),
            indian_grouping: locale.trim().eq_ignore_ascii_case("en-IN")
                || locale.trim().eq_ignore_ascii_case("hi-IN"),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.currency, &config.locale)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn format(&self, amount: i64) -> String {
        let digits = amount.unsigned_abs().to_string();
        let grouped = if self.indian_grouping {
            group_indian(&digits)
        } else {
            group_thousands(&digits)
        };
        let sign = if amount < 0 { "-" } else { "" };
        match symbol_for(&self.code) {
            Some(symbol) => format!("{sign}{symbol}{grouped}"),
            None => format!("{sign}{} {grouped}", self.code),
        }
    }

    /// Rounds half up to whole units before formatting.
    pub fn format_f64(&self, amount: f64) -> String {
        self.format(round_cost(amount))
    }
}

/// Indian rupees with en-IN grouping, e.g. `₹1,23,456`.
pub fn format_inr(amount: i64) -> String {
    CurrencyFormatter::default().format(amount)
}

fn symbol_for(code: &str) -> Option<&'static str> {
    match code {
        "INR" => Some("₹"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Last three digits form one group, everything before is grouped in pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    for (idx, ch) in head.chars().enumerate() {
        if idx > 0 && (head.len() - idx) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push(',');
    grouped.push_str(tail);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indian_grouping_uses_pairs_above_thousands() {
        assert_eq!(group_indian("5"), "5");
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("1000"), "1,000");
        assert_eq!(group_indian("123456"), "1,23,456");
        assert_eq!(group_indian("12345678"), "1,23,45,678");
    }

    #[test]
    fn western_grouping_uses_threes() {
        assert_eq!(group_thousands("12"), "12");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
