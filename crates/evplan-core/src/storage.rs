//! Persistence seam for preferences and saved budgets.

use evplan_domain::{EventPreferences, SavedBudget};

use crate::CoreError;

/// Backend capable of storing event preferences and saved budgets.
pub trait PreferencesStore: Send + Sync {
    fn save_preferences(&self, prefs: &EventPreferences) -> Result<(), CoreError>;
    /// Most recently saved preferences, if any were stored.
    fn latest_preferences(&self) -> Result<Option<EventPreferences>, CoreError>;
    fn save_budget(&self, budget: &SavedBudget) -> Result<(), CoreError>;
    /// Saved budgets, newest first.
    fn list_saved_budgets(&self) -> Result<Vec<SavedBudget>, CoreError>;
}
