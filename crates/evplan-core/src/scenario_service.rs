use chrono::{DateTime, Utc};
use evplan_domain::{BudgetResult, EventParameters, Scenario, ScenarioInsights};
use serde::Serialize;
use tracing::info;

use crate::{engine::round_cost, CoreError};

pub const DEFAULT_SCENARIO_LIMIT: usize = 5;

/// Side-by-side budgets for comparing alternative event setups.
#[derive(Debug, Clone)]
pub struct ScenarioBook {
    scenarios: Vec<Scenario>,
    active: usize,
    limit: usize,
}

impl Default for ScenarioBook {
    fn default() -> Self {
        Self::new(DEFAULT_SCENARIO_LIMIT)
    }
}

impl ScenarioBook {
    pub fn new(limit: usize) -> Self {
        Self {
            scenarios: Vec::new(),
            active: 0,
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&Scenario> {
        self.scenarios.get(self.active)
    }

    /// Stores a snapshot named `Scenario N`.
    pub fn add(
        &mut self,
        params: EventParameters,
        budget: BudgetResult,
    ) -> Result<&Scenario, CoreError> {
        if self.scenarios.len() >= self.limit {
            return Err(CoreError::ScenarioLimit(self.limit));
        }
        let name = format!("Scenario {}", self.scenarios.len() + 1);
        info!(%name, grand_total = budget.grand_total, "scenario added");
        self.scenarios.push(Scenario::new(name, params, budget));
        Ok(&self.scenarios[self.scenarios.len() - 1])
    }

    /// Removes the scenario at `index`. The active index only moves when it would fall
    /// off the end of the list. Removing an entry before the active one leaves the index
    /// in place, so it then points at the scenario that followed the old active one.
    pub fn remove(&mut self, index: usize) -> Result<Scenario, CoreError> {
        if index >= self.scenarios.len() {
            return Err(CoreError::ScenarioNotFound(index));
        }
        let previous_len = self.scenarios.len();
        let removed = self.scenarios.remove(index);
        if self.active + 1 >= previous_len {
            self.active = previous_len.saturating_sub(2);
        }
        info!(name = %removed.name, "scenario removed");
        Ok(removed)
    }

    /// Marks a scenario as active and returns it so callers can restore its inputs.
    pub fn select(&mut self, index: usize) -> Result<&Scenario, CoreError> {
        if index >= self.scenarios.len() {
            return Err(CoreError::ScenarioNotFound(index));
        }
        self.active = index;
        Ok(&self.scenarios[index])
    }

    pub fn clear(&mut self) {
        self.scenarios.clear();
        self.active = 0;
    }

    pub fn insights(&self) -> Option<ScenarioInsights> {
        let cheapest = self.scenarios.iter().min_by_key(|s| s.grand_total())?;
        let min_cost = cheapest.grand_total();
        let max_cost = self
            .scenarios
            .iter()
            .map(Scenario::grand_total)
            .max()
            .unwrap_or(min_cost);
        let sum: i64 = self.scenarios.iter().map(Scenario::grand_total).sum();
        let avg_cost = round_cost(sum as f64 / self.scenarios.len() as f64);
        Some(ScenarioInsights {
            min_cost,
            max_cost,
            avg_cost,
            savings: max_cost - min_cost,
            cheapest: cheapest.name.clone(),
        })
    }

    /// Bundles the scenarios and their insights for a JSON export.
    pub fn comparison_export(&self) -> ComparisonExport {
        let insights = self.insights();
        let summary = ComparisonSummary {
            total_scenarios: self.scenarios.len(),
            lowest_cost: insights.as_ref().map(|i| i.min_cost),
            highest_cost: insights.as_ref().map(|i| i.max_cost),
            average_cost: insights.as_ref().map(|i| i.avg_cost),
            potential_savings: insights.as_ref().map(|i| i.savings),
        };
        ComparisonExport {
            scenarios: self.scenarios.clone(),
            insights,
            exported_at: Utc::now(),
            summary,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonExport {
    pub scenarios: Vec<Scenario>,
    pub insights: Option<ScenarioInsights>,
    pub exported_at: DateTime<Utc>,
    pub summary: ComparisonSummary,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub total_scenarios: usize,
    pub lowest_cost: Option<i64>,
    pub highest_cost: Option<i64>,
    pub average_cost: Option<i64>,
    pub potential_savings: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate;

    fn params(city: &str) -> EventParameters {
        EventParameters::default()
            .with_city(city)
            .with_venue_type("banquet-hall")
            .with_catering_type("buffet")
            .with_event_type("wedding")
    }

    fn book_with(cities: &[&str]) -> ScenarioBook {
        let mut book = ScenarioBook::default();
        for city in cities {
            let p = params(city);
            let budget = calculate(&p);
            book.add(p, budget).expect("add scenario");
        }
        book
    }

    #[test]
    fn names_scenarios_in_order() {
        let book = book_with(&["pune", "delhi"]);
        let names: Vec<&str> = book.scenarios().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Scenario 1", "Scenario 2"]);
    }

    #[test]
    fn refuses_more_than_limit() {
        let mut book = book_with(&["pune", "delhi", "mumbai", "jaipur", "lucknow"]);
        let p = params("kolkata");
        let budget = calculate(&p);
        let err = book.add(p, budget).expect_err("limit");
        assert!(matches!(err, CoreError::ScenarioLimit(5)));
    }

    #[test]
    fn insights_compare_totals() {
        let book = book_with(&["lucknow", "mumbai"]);
        let insights = book.insights().expect("insights");
        let lucknow = book.scenarios()[0].grand_total();
        let mumbai = book.scenarios()[1].grand_total();
        assert!(lucknow < mumbai);
        assert_eq!(insights.min_cost, lucknow);
        assert_eq!(insights.max_cost, mumbai);
        assert_eq!(insights.savings, mumbai - lucknow);
        assert_eq!(insights.cheapest, "Scenario 1");
        assert_eq!(
            insights.avg_cost,
            round_cost((lucknow + mumbai) as f64 / 2.0)
        );
        assert!(ScenarioBook::default().insights().is_none());
    }

    #[test]
    fn removing_last_active_moves_selection_back() {
        let mut book = book_with(&["pune", "delhi", "mumbai"]);
        book.select(2).expect("select");
        book.remove(2).expect("remove");
        assert_eq!(book.active_index(), 1);
        assert!(book.remove(7).is_err());
    }

    #[test]
    fn removing_an_earlier_scenario_keeps_the_active_index() {
        let mut book = book_with(&["pune", "delhi", "mumbai"]);
        book.select(1).expect("select");
        book.remove(0).expect("remove");
        assert_eq!(book.active_index(), 1);
        assert_eq!(book.active().map(|s| s.name.as_str()), Some("Scenario 3"));
    }

    #[test]
    fn comparison_export_carries_summary() {
        let book = book_with(&["pune", "delhi"]);
        let export = book.comparison_export();
        assert_eq!(export.summary.total_scenarios, 2);
        assert_eq!(
            export.summary.potential_savings,
            export.insights.as_ref().map(|i| i.savings)
        );
        let json = serde_json::to_value(&export).expect("serialize");
        assert!(json["exportedAt"].is_string());
    }
}
