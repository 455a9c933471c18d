use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::breakdown::BudgetCategory;

/// A user-entered cost added on top of a calculated budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomExpense {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub category: BudgetCategory,
    #[serde(default)]
    pub description: String,
}

impl CustomExpense {
    pub fn new(name: impl Into<String>, amount: f64, category: BudgetCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            category,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
