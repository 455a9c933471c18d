use evplan_domain::{BudgetResult, CustomExpense, LineItem};
use tracing::debug;

use crate::{engine::round_cost, validation::validate_expense, CoreError};

const CUSTOM_EXPENSE_DESCRIPTION: &str = "Custom expense";

pub struct ExpenseService;

impl ExpenseService {
    /// Returns a copy of `result` with each expense appended to its category.
    ///
    /// All expenses are validated before any is applied. Category totals and the
    /// grand total are recomputed; the contingency item is left as calculated.
    pub fn apply(
        result: &BudgetResult,
        expenses: &[CustomExpense],
    ) -> Result<BudgetResult, CoreError> {
        for expense in expenses {
            validate_expense(expense)?;
        }

        let mut adjusted = result.clone();
        for expense in expenses {
            let description = if expense.description.trim().is_empty() {
                CUSTOM_EXPENSE_DESCRIPTION.to_string()
            } else {
                expense.description.clone()
            };
            adjusted.category_mut(expense.category).push(LineItem::new(
                expense.name.trim(),
                round_cost(expense.amount),
                description,
            ));
        }
        adjusted.recompute_grand_total();
        debug!(
            count = expenses.len(),
            grand_total = adjusted.grand_total,
            "custom expenses applied"
        );
        Ok(adjusted)
    }
}
