//! Event parameters consumed by the budget engine.

use serde::{Deserialize, Serialize};

pub const DEFAULT_AUDIENCE_SIZE: i64 = 50;
pub const DEFAULT_DURATION_HOURS: f64 = 4.0;
pub const DEFAULT_SETUP_HOURS: f64 = 2.0;
pub const DEFAULT_CLEANUP_HOURS: f64 = 1.0;

/// Inputs for a single budget calculation.
///
/// Codes are kept as plain strings so that partially filled forms (and codes the
/// pricing tables do not know) can still be priced. A blank code counts as unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catering_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default = "EventParameters::default_audience_size")]
    pub audience_size: i64,
    #[serde(default = "EventParameters::default_duration", rename = "duration")]
    pub duration_hours: f64,
    #[serde(default = "EventParameters::default_setup", rename = "setupTime")]
    pub setup_hours: f64,
    #[serde(default = "EventParameters::default_cleanup", rename = "cleanupTime")]
    pub cleanup_hours: f64,
    #[serde(default)]
    pub additional_services: Vec<String>,
}

impl Default for EventParameters {
    fn default() -> Self {
        Self {
            city: None,
            venue_type: None,
            catering_type: None,
            event_type: None,
            audience_size: DEFAULT_AUDIENCE_SIZE,
            duration_hours: DEFAULT_DURATION_HOURS,
            setup_hours: DEFAULT_SETUP_HOURS,
            cleanup_hours: DEFAULT_CLEANUP_HOURS,
            additional_services: Vec::new(),
        }
    }
}

impl EventParameters {
    pub fn default_audience_size() -> i64 {
        DEFAULT_AUDIENCE_SIZE
    }

    pub fn default_duration() -> f64 {
        DEFAULT_DURATION_HOURS
    }

    pub fn default_setup() -> f64 {
        DEFAULT_SETUP_HOURS
    }

    pub fn default_cleanup() -> f64 {
        DEFAULT_CLEANUP_HOURS
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_venue_type(mut self, venue_type: impl Into<String>) -> Self {
        self.venue_type = Some(venue_type.into());
        self
    }

    pub fn with_catering_type(mut self, catering_type: impl Into<String>) -> Self {
        self.catering_type = Some(catering_type.into());
        self
    }

    pub fn with_event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    pub fn with_audience_size(mut self, audience_size: i64) -> Self {
        self.audience_size = audience_size;
        self
    }

    pub fn with_hours(mut self, duration: f64, setup: f64, cleanup: f64) -> Self {
        self.duration_hours = duration;
        self.setup_hours = setup;
        self.cleanup_hours = cleanup;
        self
    }

    pub fn with_service(mut self, code: impl Into<String>) -> Self {
        self.additional_services.push(code.into());
        self
    }

    /// Returns the city code when it is set and not blank.
    pub fn city_code(&self) -> Option<&str> {
        non_blank(&self.city)
    }

    pub fn venue_code(&self) -> Option<&str> {
        non_blank(&self.venue_type)
    }

    pub fn catering_code(&self) -> Option<&str> {
        non_blank(&self.catering_type)
    }

    pub fn event_code(&self) -> Option<&str> {
        non_blank(&self.event_type)
    }

    /// `true` once city, event type and venue type are all present. Incomplete
    /// parameters price to an empty budget.
    pub fn is_complete(&self) -> bool {
        self.city_code().is_some() && self.event_code().is_some() && self.venue_code().is_some()
    }

    /// Names of the required fields that are still unset.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.city_code().is_none() {
            missing.push("city");
        }
        if self.event_code().is_none() {
            missing.push("eventType");
        }
        if self.venue_code().is_none() {
            missing.push("venueType");
        }
        missing
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_codes_count_as_unset() {
        let params = EventParameters::default()
            .with_city("  ")
            .with_event_type("corporate")
            .with_venue_type("restaurant");
        assert!(!params.is_complete());
        assert_eq!(params.missing_fields(), vec!["city"]);
    }

    #[test]
    fn deserializes_form_style_keys() {
        let json = r#"{
            "city": "pune",
            "venueType": "restaurant",
            "eventType": "wedding",
            "audienceSize": 120,
            "duration": 6,
            "setupTime": 3,
            "additionalServices": ["music"]
        }"#;
        let params: EventParameters = serde_json::from_str(json).expect("parse params");
        assert_eq!(params.audience_size, 120);
        assert_eq!(params.duration_hours, 6.0);
        assert_eq!(params.setup_hours, 3.0);
        assert_eq!(params.cleanup_hours, DEFAULT_CLEANUP_HOURS);
        assert_eq!(params.catering_type, None);
        assert_eq!(params.additional_services, vec!["music".to_string()]);
    }
}
