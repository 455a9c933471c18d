use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{breakdown::BudgetResult, params::EventParameters};

/// A named snapshot of parameters and their computed budget, kept for comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: Uuid,
    pub name: String,
    pub params: EventParameters,
    pub budget: BudgetResult,
    pub created_at: DateTime<Utc>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, params: EventParameters, budget: BudgetResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            params,
            budget,
            created_at: Utc::now(),
        }
    }

    pub fn grand_total(&self) -> i64 {
        self.budget.grand_total
    }
}

/// Aggregate figures across the scenarios being compared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInsights {
    pub min_cost: i64,
    pub max_cost: i64,
    pub avg_cost: i64,
    pub savings: i64,
    pub cheapest: String,
}
