//! Static pricing tables owned by the budget engine.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::CoreError;

pub const STANDARD_PRICING_VERSION: u32 = 1;

/// Multiplier applied when the city is unknown.
pub const NEUTRAL_CITY_MULTIPLIER: f64 = 1.0;
/// Venue base cost applied when the venue type is unknown.
pub const FALLBACK_VENUE_COST: f64 = 1000.0;

const SUGGESTION_THRESHOLD: f64 = 0.8;

static STANDARD: Lazy<PricingTables> = Lazy::new(PricingTables::build_standard);

/// Which table a code belongs to, used for lookups and suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingTable {
    City,
    Venue,
    Catering,
    Service,
}

/// Versioned price lists. Edited at deployment time, never mutated while running.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingTables {
    pub version: u32,
    pub city_multipliers: BTreeMap<String, f64>,
    pub venue_costs: BTreeMap<String, f64>,
    pub catering_costs: BTreeMap<String, f64>,
    pub service_costs: BTreeMap<String, f64>,
}

impl PricingTables {
    /// Built-in tables shared by every caller.
    pub fn standard() -> &'static PricingTables {
        &STANDARD
    }

    /// Parses tables from JSON, e.g. a deployment-specific price list.
    pub fn from_json(data: &str) -> Result<Self, CoreError> {
        let tables: PricingTables = serde_json::from_str(data)?;
        tables.check()?;
        Ok(tables)
    }

    pub fn city_multiplier(&self, city: Option<&str>) -> f64 {
        lookup(&self.city_multipliers, city).unwrap_or(NEUTRAL_CITY_MULTIPLIER)
    }

    pub fn venue_cost(&self, venue_type: Option<&str>) -> f64 {
        lookup(&self.venue_costs, venue_type).unwrap_or(FALLBACK_VENUE_COST)
    }

    pub fn catering_cost(&self, catering_type: Option<&str>) -> f64 {
        lookup(&self.catering_costs, catering_type).unwrap_or(0.0)
    }

    pub fn service_cost(&self, service: &str) -> f64 {
        lookup(&self.service_costs, Some(service)).unwrap_or(0.0)
    }

    /// Known codes of a table in sorted order.
    pub fn codes(&self, table: PricingTable) -> Vec<&str> {
        self.table(table).keys().map(String::as_str).collect()
    }

    pub fn contains(&self, table: PricingTable, code: &str) -> bool {
        self.table(table).contains_key(code)
    }

    /// Closest known code for a mistyped one, if any is similar enough.
    pub fn suggest(&self, table: PricingTable, code: &str) -> Option<&str> {
        let needle = code.trim().to_ascii_lowercase();
        if needle.is_empty() || self.contains(table, &needle) {
            return None;
        }
        self.table(table)
            .keys()
            .map(|candidate| (candidate, strsim::jaro_winkler(&needle, candidate)))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(candidate, _)| candidate.as_str())
    }

    fn table(&self, table: PricingTable) -> &BTreeMap<String, f64> {
        match table {
            PricingTable::City => &self.city_multipliers,
            PricingTable::Venue => &self.venue_costs,
            PricingTable::Catering => &self.catering_costs,
            PricingTable::Service => &self.service_costs,
        }
    }

    fn check(&self) -> Result<(), CoreError> {
        let tables = [
            ("cityMultipliers", &self.city_multipliers),
            ("venueCosts", &self.venue_costs),
            ("cateringCosts", &self.catering_costs),
            ("serviceCosts", &self.service_costs),
        ];
        for (name, table) in tables {
            if let Some((code, value)) = table
                .iter()
                .find(|(_, value)| !value.is_finite() || **value < 0.0)
            {
                return Err(CoreError::Serialization(format!(
                    "{name}.{code} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    fn build_standard() -> Self {
        Self {
            version: STANDARD_PRICING_VERSION,
            city_multipliers: table(&[
                ("mumbai", 1.4),
                ("delhi", 1.3),
                ("bangalore", 1.2),
                ("hyderabad", 1.0),
                ("ahmedabad", 0.9),
                ("surat", 0.8),
                ("vadodara", 0.85),
                ("rajkot", 0.75),
                ("gandhinagar", 0.9),
                ("chennai", 1.1),
                ("kolkata", 0.8),
                ("pune", 1.1),
                ("jaipur", 0.9),
                ("lucknow", 0.7),
            ]),
            venue_costs: table(&[
                ("hotel-ballroom", 2000.0),
                ("conference-center", 1500.0),
                ("restaurant", 1200.0),
                ("outdoor-venue", 800.0),
                ("community-center", 500.0),
                ("university-hall", 600.0),
                ("banquet-hall", 1000.0),
                ("rooftop-venue", 1800.0),
            ]),
            catering_costs: table(&[
                ("full-service", 85.0),
                ("buffet", 45.0),
                ("cocktail", 35.0),
                ("plated-dinner", 75.0),
                ("box-lunch", 25.0),
                ("coffee-break", 15.0),
                ("no-catering", 0.0),
            ]),
            service_costs: table(&[
                ("av-equipment", 800.0),
                ("photography", 1200.0),
                ("music", 600.0),
                ("flowers", 400.0),
                ("security", 300.0),
                ("parking", 200.0),
                ("registration", 150.0),
                ("transportation", 500.0),
            ]),
        }
    }
}

impl Default for PricingTables {
    fn default() -> Self {
        Self::standard().clone()
    }
}

fn table(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(code, value)| (code.to_string(), *value))
        .collect()
}

fn lookup(table: &BTreeMap<String, f64>, code: Option<&str>) -> Option<f64> {
    let code = code?.trim();
    if code.is_empty() {
        return None;
    }
    table.get(code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_fall_back_to_neutral_values() {
        let tables = PricingTables::standard();
        assert_eq!(tables.city_multiplier(Some("new-york")), 1.0);
        assert_eq!(tables.city_multiplier(None), 1.0);
        assert_eq!(tables.venue_cost(Some("castle")), 1000.0);
        assert_eq!(tables.catering_cost(Some("tapas")), 0.0);
        assert_eq!(tables.service_cost("fireworks"), 0.0);
    }

    #[test]
    fn known_codes_resolve() {
        let tables = PricingTables::standard();
        assert_eq!(tables.city_multiplier(Some("mumbai")), 1.4);
        assert_eq!(tables.venue_cost(Some("conference-center")), 1500.0);
        assert_eq!(tables.catering_cost(Some("buffet")), 45.0);
        assert_eq!(tables.service_cost("photography"), 1200.0);
    }

    #[test]
    fn suggests_close_codes_only() {
        let tables = PricingTables::standard();
        assert_eq!(tables.suggest(PricingTable::City, "mumbay"), Some("mumbai"));
        assert_eq!(tables.suggest(PricingTable::Venue, "resturant"), Some("restaurant"));
        assert_eq!(tables.suggest(PricingTable::City, "mumbai"), None);
        assert_eq!(tables.suggest(PricingTable::Service, "zzz"), None);
    }

    #[test]
    fn json_tables_reject_negative_prices() {
        let json = r#"{
            "version": 2,
            "cityMultipliers": {"goa": 1.2},
            "venueCosts": {"beach": -5},
            "cateringCosts": {},
            "serviceCosts": {}
        }"#;
        let err = PricingTables::from_json(json).expect_err("negative price");
        assert!(err.to_string().contains("venueCosts.beach"));
    }

    #[test]
    fn json_tables_round_trip_standard() {
        let json = serde_json::to_string(PricingTables::standard()).expect("serialize");
        let parsed = PricingTables::from_json(&json).expect("parse");
        assert_eq!(&parsed, PricingTables::standard());
    }
}
