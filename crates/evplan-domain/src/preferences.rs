//! Saved event preferences exchanged with the preferences store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{breakdown::BudgetResult, params::EventParameters};

/// Preferences captured on the planning dashboard.
///
/// Older records used snake_case keys (`event_type`, `number_of_people`, ...), so
/// both spellings are accepted when reading.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventPreferences {
    #[serde(default, alias = "event_type")]
    pub event_type: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default, alias = "number_of_people", skip_serializing_if = "Option::is_none")]
    pub number_of_people: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<i64>,
    #[serde(default, alias = "event_date")]
    pub event_date: String,
    #[serde(default, alias = "event_time")]
    pub event_time: String,
    #[serde(default, alias = "selected_functions")]
    pub selected_functions: Vec<String>,
}

/// A budget stored for later retrieval alongside the inputs that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedBudget {
    pub id: Uuid,
    pub name: String,
    pub form_data: EventParameters,
    pub budget_data: BudgetResult,
    pub created_at: DateTime<Utc>,
}

impl SavedBudget {
    pub fn new(
        name: impl Into<String>,
        form_data: EventParameters,
        budget_data: BudgetResult,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            form_data,
            budget_data,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_legacy_snake_case_keys() {
        let json = r#"{
            "event_type": "Wedding",
            "city": "delhi",
            "number_of_people": 300,
            "event_date": "2025-02-14"
        }"#;
        let prefs: EventPreferences = serde_json::from_str(json).expect("parse preferences");
        assert_eq!(prefs.event_type, "Wedding");
        assert_eq!(prefs.number_of_people, Some(300));
        assert_eq!(prefs.event_date, "2025-02-14");
        assert!(prefs.selected_functions.is_empty());
    }
}
