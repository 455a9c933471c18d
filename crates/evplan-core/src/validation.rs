//! Optional input checks that front ends can run before pricing.
//!
//! The engine itself never rejects input; these checks exist for callers that
//! prefer an error over nonsensical (for example negative) costs.

use evplan_domain::{CustomExpense, EventParameters};
use tracing::warn;

use crate::CoreError;

pub fn validate_parameters(params: &EventParameters) -> Result<(), CoreError> {
    if params.audience_size < 1 {
        return Err(reject(
            "audienceSize",
            format!("must be at least 1, got {}", params.audience_size),
        ));
    }
    if !params.duration_hours.is_finite() || params.duration_hours <= 0.0 {
        return Err(reject(
            "duration",
            format!("must be greater than 0 hours, got {}", params.duration_hours),
        ));
    }
    check_non_negative("setupTime", params.setup_hours)?;
    check_non_negative("cleanupTime", params.cleanup_hours)?;
    Ok(())
}

pub fn validate_expense(expense: &CustomExpense) -> Result<(), CoreError> {
    if expense.name.trim().is_empty() {
        warn!("custom expense rejected: missing name");
        return Err(CoreError::InvalidExpense("expense name is required".into()));
    }
    if !expense.amount.is_finite() || expense.amount <= 0.0 {
        warn!(amount = expense.amount, "custom expense rejected: bad amount");
        return Err(CoreError::InvalidExpense(format!(
            "amount must be a positive number, got {}",
            expense.amount
        )));
    }
    Ok(())
}

fn check_non_negative(field: &'static str, hours: f64) -> Result<(), CoreError> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(reject(field, format!("must be 0 hours or more, got {hours}")));
    }
    Ok(())
}

fn reject(field: &'static str, reason: String) -> CoreError {
    warn!(field, %reason, "event parameters rejected");
    CoreError::InvalidParameter { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evplan_domain::BudgetCategory;

    #[test]
    fn accepts_defaults() {
        assert!(validate_parameters(&EventParameters::default()).is_ok());
    }

    #[test]
    fn rejects_non_positive_duration() {
        let params = EventParameters::default().with_hours(0.0, 1.0, 1.0);
        let err = validate_parameters(&params).expect_err("zero duration");
        assert!(err.to_string().contains("duration"));

        let params = EventParameters::default().with_hours(f64::NAN, 1.0, 1.0);
        assert!(validate_parameters(&params).is_err());
    }

    #[test]
    fn rejects_negative_cleanup() {
        let params = EventParameters::default().with_hours(4.0, 0.0, -1.0);
        let err = validate_parameters(&params).expect_err("negative cleanup");
        assert!(matches!(
            err,
            CoreError::InvalidParameter {
                field: "cleanupTime",
                ..
            }
        ));
    }

    #[test]
    fn expense_needs_name_and_positive_amount() {
        let blank = CustomExpense::new("  ", 10.0, BudgetCategory::Venue);
        assert!(validate_expense(&blank).is_err());
        let free = CustomExpense::new("Decor", 0.0, BudgetCategory::Venue);
        assert!(validate_expense(&free).is_err());
        let ok = CustomExpense::new("Decor", 99.5, BudgetCategory::Venue);
        assert!(validate_expense(&ok).is_ok());
    }
}
