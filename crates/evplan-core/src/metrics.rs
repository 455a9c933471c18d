//! Figures derived from a budget for summaries and charts.

use evplan_domain::{BudgetCategory, BudgetResult, EventParameters};
use serde::Serialize;

/// Headline numbers shown next to a budget.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub total_cost: i64,
    pub per_guest: f64,
    pub per_hour: f64,
}

impl BudgetSummary {
    /// Divisions by a non-positive audience or duration report 0.
    pub fn from_result(result: &BudgetResult, params: &EventParameters) -> Self {
        let total = result.grand_total as f64;
        let per_guest = if params.audience_size > 0 {
            total / params.audience_size as f64
        } else {
            0.0
        };
        let per_hour = if params.duration_hours > 0.0 {
            total / params.duration_hours
        } else {
            0.0
        };
        Self {
            total_cost: result.grand_total,
            per_guest,
            per_hour,
        }
    }
}

/// One slice of the category chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: BudgetCategory,
    pub value: i64,
    /// Share of the grand total in percent, one decimal place.
    pub percentage: f64,
}

/// Non-empty categories with their share of the grand total.
pub fn category_shares(result: &BudgetResult) -> Vec<CategoryShare> {
    if result.grand_total == 0 {
        return Vec::new();
    }
    let total = result.grand_total as f64;
    result
        .categories()
        .filter(|(_, breakdown)| breakdown.total > 0)
        .map(|(category, breakdown)| CategoryShare {
            category,
            value: breakdown.total,
            percentage: (breakdown.total as f64 / total * 1000.0).round() / 10.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate;

    fn params() -> EventParameters {
        EventParameters::default()
            .with_city("hyderabad")
            .with_venue_type("conference-center")
            .with_catering_type("buffet")
            .with_event_type("corporate")
    }

    #[test]
    fn summary_divides_by_guests_and_hours() {
        let p = params();
        let result = calculate(&p);
        let summary = BudgetSummary::from_result(&result, &p);
        assert_eq!(summary.total_cost, 5262);
        assert!((summary.per_guest - 105.24).abs() < 1e-9);
        assert!((summary.per_hour - 1315.5).abs() < 1e-9);
    }

    #[test]
    fn summary_guards_zero_divisors() {
        let p = params().with_audience_size(0).with_hours(0.0, 2.0, 1.0);
        let result = calculate(&p);
        let summary = BudgetSummary::from_result(&result, &p);
        assert_eq!(summary.per_guest, 0.0);
        assert_eq!(summary.per_hour, 0.0);
    }

    #[test]
    fn shares_skip_empty_categories() {
        let result = calculate(&params());
        let shares = category_shares(&result);
        let categories: Vec<BudgetCategory> = shares.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            [
                BudgetCategory::Venue,
                BudgetCategory::Catering,
                BudgetCategory::Miscellaneous
            ]
        );
        assert_eq!(shares[0].percentage, 33.8);
        assert!(category_shares(&BudgetResult::empty()).is_empty());
    }
}
