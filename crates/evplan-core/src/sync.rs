//! Keeps the dashboard form and the budget calculator form in step.
//!
//! Each update function applies a partial change to one form and copies only the
//! overlapping fields that were part of that change onto the other form.

use evplan_domain::{
    BudgetForm, BudgetUpdate, DashboardForm, DashboardUpdate, EventParameters, EventPreferences,
};
use tracing::{debug, info};

use crate::{engine::round_cost, pricing::PricingTables};

/// Budget suggested for a city before the user picks one themselves.
pub const BASE_SUGGESTED_BUDGET: f64 = 50_000.0;

/// Both planning forms, owned by one coordinator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanningState {
    pub dashboard: DashboardForm,
    pub budget: BudgetForm,
}

impl PlanningState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a dashboard change and mirrors city, event type, audience size,
    /// venue type and duration onto the budget form.
    pub fn update_dashboard(&mut self, update: DashboardUpdate) {
        update.apply_to(&mut self.dashboard);

        let mirrored = BudgetUpdate {
            city: update.city.clone(),
            event_type: update
                .event_type
                .as_deref()
                .map(map_event_type_to_budget),
            audience_size: update.audience_size,
            venue_type: update.venue_type.clone(),
            duration: update.duration,
            ..BudgetUpdate::default()
        };
        mirrored.apply_to(&mut self.budget);
        debug!(?mirrored, "dashboard change mirrored to budget form");
    }

    /// Applies a budget form change and mirrors city, audience size, venue type
    /// and duration back onto the dashboard. Event type does not flow back.
    pub fn update_budget(&mut self, update: BudgetUpdate) {
        update.apply_to(&mut self.budget);

        let mirrored = DashboardUpdate {
            city: update.city.clone(),
            audience_size: update.audience_size,
            venue_type: update.venue_type.clone(),
            duration: update.duration,
            ..DashboardUpdate::default()
        };
        mirrored.apply_to(&mut self.dashboard);
        debug!(?mirrored, "budget change mirrored to dashboard");
    }

    /// Loads saved preferences into both forms. Empty preference fields keep
    /// the current values.
    pub fn apply_preferences(&mut self, prefs: &EventPreferences) {
        let dashboard = DashboardUpdate {
            event_type: non_empty(&prefs.event_type),
            city: non_empty(&prefs.city),
            venue: non_empty(&prefs.venue),
            audience_size: prefs.number_of_people,
            budget: prefs.budget,
            date: non_empty(&prefs.event_date),
            time: non_empty(&prefs.event_time),
            selected_functions: if prefs.selected_functions.is_empty() {
                None
            } else {
                Some(prefs.selected_functions.clone())
            },
            ..DashboardUpdate::default()
        };
        dashboard.apply_to(&mut self.dashboard);

        let venue_type = map_venue_to_type(&prefs.venue);
        let budget = BudgetUpdate {
            city: non_empty(&prefs.city),
            audience_size: prefs.number_of_people,
            event_type: non_empty(&map_event_type_to_budget(&prefs.event_type)),
            venue_type: non_empty(venue_type),
            ..BudgetUpdate::default()
        };
        budget.apply_to(&mut self.budget);
        info!(
            city = %prefs.city,
            event_type = %prefs.event_type,
            "saved preferences loaded"
        );
    }

    /// Preferences to persist, taken from the dashboard with the budget form as
    /// fallback for city and audience size.
    pub fn shared_preferences(&self) -> EventPreferences {
        let city = if self.dashboard.city.trim().is_empty() {
            self.budget.city.clone()
        } else {
            self.dashboard.city.clone()
        };
        let audience = if self.dashboard.audience_size != 0 {
            self.dashboard.audience_size
        } else {
            self.budget.audience_size
        };
        EventPreferences {
            event_type: self.dashboard.event_type.clone(),
            city,
            venue: self.dashboard.venue.clone(),
            number_of_people: Some(audience),
            budget: Some(self.dashboard.budget),
            event_date: self.dashboard.date.clone(),
            event_time: self.dashboard.time.clone(),
            selected_functions: self.dashboard.selected_functions.clone(),
        }
    }

    pub fn budget_parameters(&self) -> EventParameters {
        self.budget.to_parameters()
    }
}

/// Maps dashboard event type labels onto budget calculator codes.
///
/// Unlisted labels are lower-cased with whitespace runs replaced by `-`.
pub fn map_event_type_to_budget(label: &str) -> String {
    let mapped = match label {
        "Corporate Conference" => "corporate",
        "Wedding Celebration" => "wedding",
        "Birthday Party" => "birthday",
        "Product Launch" => "product-launch",
        "Academic Seminar" => "academic",
        "Networking Event" => "networking",
        "Charity Fundraiser" => "fundraiser",
        "Music Concert" | "Art Exhibition" | "Sports Tournament" => "corporate",
        other => {
            return other
                .to_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-")
        }
    };
    mapped.to_string()
}

/// Maps a named venue onto its venue type. Unknown venues map to `""`.
pub fn map_venue_to_type(venue: &str) -> &'static str {
    match venue {
        "taj-palace-delhi" => "outdoor-venue",
        "leela-mumbai" => "hotel-ballroom",
        "itc-maurya-delhi" => "conference-center",
        "oberoi-bangalore" => "rooftop-venue",
        "trident-hyderabad" => "outdoor-venue",
        "lalit-ashok-bangalore" => "conference-center",
        "jw-marriott-pune" => "hotel-ballroom",
        "radisson-blu-chennai" => "banquet-hall",
        _ => "",
    }
}

/// Starting budget for a city: the base amount scaled by the city multiplier.
/// `None` for cities without a multiplier.
pub fn suggested_budget(tables: &PricingTables, city: &str) -> Option<i64> {
    tables
        .city_multipliers
        .get(city.trim())
        .map(|multiplier| round_cost(BASE_SUGGESTED_BUDGET * multiplier))
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_changes_reach_budget_form() {
        let mut state = PlanningState::new();
        state.update_dashboard(DashboardUpdate {
            city: Some("pune".into()),
            event_type: Some("Corporate Conference".into()),
            audience_size: Some(120),
            event_name: Some("Launch".into()),
            ..DashboardUpdate::default()
        });
        assert_eq!(state.budget.city, "pune");
        assert_eq!(state.budget.event_type, "corporate");
        assert_eq!(state.budget.audience_size, 120);
        assert_eq!(state.dashboard.event_type, "Corporate Conference");
        assert_eq!(state.dashboard.event_name, "Launch");
    }

    #[test]
    fn budget_changes_flow_back_without_event_type() {
        let mut state = PlanningState::new();
        state.update_budget(BudgetUpdate {
            city: Some("delhi".into()),
            event_type: Some("wedding".into()),
            venue_type: Some("banquet-hall".into()),
            duration: Some(6.0),
            catering_type: Some("buffet".into()),
            ..BudgetUpdate::default()
        });
        assert_eq!(state.dashboard.city, "delhi");
        assert_eq!(state.dashboard.venue_type, "banquet-hall");
        assert_eq!(state.dashboard.duration, 6.0);
        assert_eq!(state.dashboard.event_type, "");
    }

    #[test]
    fn untouched_fields_are_not_mirrored() {
        let mut state = PlanningState::new();
        state.budget.city = "jaipur".into();
        state.update_dashboard(DashboardUpdate {
            budget: Some(90_000),
            ..DashboardUpdate::default()
        });
        assert_eq!(state.budget.city, "jaipur");
    }

    #[test]
    fn event_type_labels_map_to_codes() {
        assert_eq!(map_event_type_to_budget("Music Concert"), "corporate");
        assert_eq!(map_event_type_to_budget("Wedding"), "wedding");
        assert_eq!(map_event_type_to_budget("Team  Offsite Day"), "team-offsite-day");
        assert_eq!(map_event_type_to_budget(""), "");
    }

    #[test]
    fn preferences_populate_both_forms() {
        let mut state = PlanningState::new();
        let prefs = EventPreferences {
            event_type: "Birthday Party".into(),
            city: "chennai".into(),
            venue: "radisson-blu-chennai".into(),
            number_of_people: Some(75),
            ..EventPreferences::default()
        };
        state.apply_preferences(&prefs);
        assert_eq!(state.budget.event_type, "birthday");
        assert_eq!(state.budget.venue_type, "banquet-hall");
        assert_eq!(state.budget.audience_size, 75);
        assert_eq!(state.dashboard.venue, "radisson-blu-chennai");

        let shared = state.shared_preferences();
        assert_eq!(shared.city, "chennai");
        assert_eq!(shared.number_of_people, Some(75));
    }

    #[test]
    fn unknown_venue_keeps_existing_venue_type() {
        let mut state = PlanningState::new();
        state.budget.venue_type = "restaurant".into();
        state.apply_preferences(&EventPreferences {
            venue: "hyatt-ahmedabad".into(),
            ..EventPreferences::default()
        });
        assert_eq!(state.budget.venue_type, "restaurant");
    }

    #[test]
    fn suggests_budget_for_known_cities() {
        let tables = PricingTables::standard();
        assert_eq!(suggested_budget(tables, "mumbai"), Some(70_000));
        assert_eq!(suggested_budget(tables, "vadodara"), Some(42_500));
        assert_eq!(suggested_budget(tables, "austin"), None);
    }
}
