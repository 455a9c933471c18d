//! Form state for the planning dashboard and the budget calculator.
//!
//! The two forms overlap on a handful of fields. Keeping them in step is the job
//! of an explicit coordinator in `evplan-core`; these types only hold data.

use serde::{Deserialize, Serialize};

use crate::params::{
    EventParameters, DEFAULT_AUDIENCE_SIZE, DEFAULT_CLEANUP_HOURS, DEFAULT_DURATION_HOURS,
    DEFAULT_SETUP_HOURS,
};

/// Dashboard fields describing the event as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardForm {
    pub event_name: String,
    pub event_type: String,
    pub description: String,
    pub prompt: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub city: String,
    pub venue: String,
    pub venue_type: String,
    pub audience_size: i64,
    pub duration: f64,
    pub budget: i64,
    pub selected_functions: Vec<String>,
}

impl Default for DashboardForm {
    fn default() -> Self {
        Self {
            event_name: String::new(),
            event_type: String::new(),
            description: String::new(),
            prompt: String::new(),
            date: String::new(),
            time: String::new(),
            location: String::new(),
            city: String::new(),
            venue: String::new(),
            venue_type: String::new(),
            audience_size: DEFAULT_AUDIENCE_SIZE,
            duration: DEFAULT_DURATION_HOURS,
            budget: 0,
            selected_functions: Vec::new(),
        }
    }
}

/// Budget calculator inputs as edited on the calculator page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetForm {
    pub city: String,
    pub audience_size: i64,
    pub event_type: String,
    pub venue_type: String,
    pub catering_type: String,
    pub duration: f64,
    pub setup_time: f64,
    pub cleanup_time: f64,
    pub additional_services: Vec<String>,
    pub special_requirements: String,
}

impl Default for BudgetForm {
    fn default() -> Self {
        Self {
            city: String::new(),
            audience_size: DEFAULT_AUDIENCE_SIZE,
            event_type: String::new(),
            venue_type: String::new(),
            catering_type: String::new(),
            duration: DEFAULT_DURATION_HOURS,
            setup_time: DEFAULT_SETUP_HOURS,
            cleanup_time: DEFAULT_CLEANUP_HOURS,
            additional_services: Vec::new(),
            special_requirements: String::new(),
        }
    }
}

impl BudgetForm {
    /// Converts the form into engine parameters. Blank codes become unset.
    pub fn to_parameters(&self) -> EventParameters {
        EventParameters {
            city: optional(&self.city),
            venue_type: optional(&self.venue_type),
            catering_type: optional(&self.catering_type),
            event_type: optional(&self.event_type),
            audience_size: self.audience_size,
            duration_hours: self.duration,
            setup_hours: self.setup_time,
            cleanup_hours: self.cleanup_time,
            additional_services: self.additional_services.clone(),
        }
    }

    /// `true` when every field the calculator page requires is filled in.
    pub fn is_ready(&self) -> bool {
        [&self.city, &self.event_type, &self.venue_type, &self.catering_type]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

/// Partial change to the dashboard form. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardUpdate {
    pub event_name: Option<String>,
    pub event_type: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub venue: Option<String>,
    pub venue_type: Option<String>,
    pub audience_size: Option<i64>,
    pub duration: Option<f64>,
    pub budget: Option<i64>,
    pub selected_functions: Option<Vec<String>>,
}

/// Partial change to the budget form. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetUpdate {
    pub city: Option<String>,
    pub audience_size: Option<i64>,
    pub event_type: Option<String>,
    pub venue_type: Option<String>,
    pub catering_type: Option<String>,
    pub duration: Option<f64>,
    pub setup_time: Option<f64>,
    pub cleanup_time: Option<f64>,
    pub additional_services: Option<Vec<String>>,
    pub special_requirements: Option<String>,
}

impl BudgetUpdate {
    /// Applies the set fields onto `form`.
    pub fn apply_to(&self, form: &mut BudgetForm) {
        if let Some(city) = &self.city {
            form.city = city.clone();
        }
        if let Some(size) = self.audience_size {
            form.audience_size = size;
        }
        if let Some(event_type) = &self.event_type {
            form.event_type = event_type.clone();
        }
        if let Some(venue_type) = &self.venue_type {
            form.venue_type = venue_type.clone();
        }
        if let Some(catering_type) = &self.catering_type {
            form.catering_type = catering_type.clone();
        }
        if let Some(duration) = self.duration {
            form.duration = duration;
        }
        if let Some(setup) = self.setup_time {
            form.setup_time = setup;
        }
        if let Some(cleanup) = self.cleanup_time {
            form.cleanup_time = cleanup;
        }
        if let Some(services) = &self.additional_services {
            form.additional_services = services.clone();
        }
        if let Some(requirements) = &self.special_requirements {
            form.special_requirements = requirements.clone();
        }
    }
}

impl DashboardUpdate {
    /// Applies the set fields onto `form`.
    pub fn apply_to(&self, form: &mut DashboardForm) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                *target = value.clone();
            }
        }

        set(&mut form.event_name, &self.event_name);
        set(&mut form.event_type, &self.event_type);
        set(&mut form.description, &self.description);
        set(&mut form.date, &self.date);
        set(&mut form.time, &self.time);
        set(&mut form.location, &self.location);
        set(&mut form.city, &self.city);
        set(&mut form.venue, &self.venue);
        set(&mut form.venue_type, &self.venue_type);
        set(&mut form.audience_size, &self.audience_size);
        set(&mut form.duration, &self.duration);
        set(&mut form.budget, &self.budget);
        set(&mut form.selected_functions, &self.selected_functions);
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_fields_become_unset_parameters() {
        let form = BudgetForm {
            city: "mumbai".into(),
            venue_type: " ".into(),
            ..BudgetForm::default()
        };
        let params = form.to_parameters();
        assert_eq!(params.city.as_deref(), Some("mumbai"));
        assert_eq!(params.venue_type, None);
        assert_eq!(params.setup_hours, DEFAULT_SETUP_HOURS);
        assert!(!form.is_ready());
    }

    #[test]
    fn update_only_touches_set_fields() {
        let mut form = BudgetForm::default();
        BudgetUpdate {
            catering_type: Some("buffet".into()),
            audience_size: Some(80),
            ..BudgetUpdate::default()
        }
        .apply_to(&mut form);
        assert_eq!(form.catering_type, "buffet");
        assert_eq!(form.audience_size, 80);
        assert_eq!(form.duration, DEFAULT_DURATION_HOURS);
    }
}
