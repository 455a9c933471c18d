//! Deterministic event budget calculation.
//!
//! Every line item is rounded on its own (half up, as the calculator always did),
//! category totals are sums of rounded items and the grand total is the sum of
//! the category totals. Rounding error is never redistributed.

use evplan_domain::{BudgetResult, CategoryBreakdown, EventParameters, LineItem};
use tracing::debug;

use crate::{pricing::PricingTables, validation::validate_parameters, CoreError};

/// Hours of venue hire covered by the base venue price.
pub const VENUE_BASELINE_HOURS: f64 = 4.0;
pub const SETUP_RATE_PER_HOUR: f64 = 100.0;
pub const CLEANUP_RATE_PER_HOUR: f64 = 80.0;
pub const CATERING_SERVICE_FEE_RATE: f64 = 0.18;
pub const CATERING_TAX_RATE: f64 = 0.08;
pub const CONTINGENCY_RATE: f64 = 0.10;
pub const INSURANCE_BASE: f64 = 150.0;
pub const PERMIT_BASE: f64 = 200.0;
/// Event type that triggers the permits line item.
pub const PERMIT_EVENT_TYPE: &str = "outdoor-venue";

/// Prices event parameters against a set of pricing tables.
#[derive(Debug, Clone, Copy)]
pub struct BudgetEngine<'t> {
    tables: &'t PricingTables,
}

impl BudgetEngine<'static> {
    /// Engine backed by the built-in tables.
    pub fn standard() -> Self {
        Self::new(PricingTables::standard())
    }
}

impl Default for BudgetEngine<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'t> BudgetEngine<'t> {
    pub fn new(tables: &'t PricingTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'t PricingTables {
        self.tables
    }

    /// Computes the budget breakdown.
    ///
    /// Incomplete parameters (no city, event type or venue type) yield the empty
    /// result. Unknown codes price with neutral fallbacks. Numeric fields are not
    /// checked here; see [`BudgetEngine::calculate_checked`].
    pub fn calculate(&self, params: &EventParameters) -> BudgetResult {
        if !params.is_complete() {
            debug!(missing = ?params.missing_fields(), "incomplete parameters, empty budget");
            return BudgetResult::empty();
        }

        let multiplier = self.tables.city_multiplier(params.city_code());
        let venue = self.venue(params, multiplier);
        let catering = self.catering(params, multiplier);
        let services = self.services(params, multiplier);
        let miscellaneous = self.miscellaneous(
            params,
            multiplier,
            venue.total + catering.total + services.total,
        );

        let result = BudgetResult::from_categories(venue, catering, services, miscellaneous);
        debug!(
            city = params.city_code().unwrap_or_default(),
            multiplier,
            grand_total = result.grand_total,
            "budget calculated"
        );
        result
    }

    /// Validates the numeric parameters first and only then calculates.
    pub fn calculate_checked(&self, params: &EventParameters) -> Result<BudgetResult, CoreError> {
        validate_parameters(params)?;
        Ok(self.calculate(params))
    }

    fn venue(&self, params: &EventParameters, multiplier: f64) -> CategoryBreakdown {
        let base = self.tables.venue_cost(params.venue_code());
        let rental = round_cost(base * multiplier * (params.duration_hours / VENUE_BASELINE_HOURS));
        let setup = round_cost(params.setup_hours * SETUP_RATE_PER_HOUR * multiplier);
        let cleanup = round_cost(params.cleanup_hours * CLEANUP_RATE_PER_HOUR * multiplier);

        CategoryBreakdown::from_items(vec![
            LineItem::new(
                "Venue Rental",
                rental,
                format!("{} hours rental", params.duration_hours),
            ),
            LineItem::new("Setup Time", setup, format!("{} hours", params.setup_hours)),
            LineItem::new(
                "Cleanup Time",
                cleanup,
                format!("{} hours", params.cleanup_hours),
            ),
        ])
    }

    fn catering(&self, params: &EventParameters, multiplier: f64) -> CategoryBreakdown {
        let per_person = self.tables.catering_cost(params.catering_code());
        let food = round_cost(per_person * params.audience_size as f64 * multiplier);
        if food == 0 {
            return CategoryBreakdown::from_items(vec![LineItem::new(
                "No Catering Selected",
                0,
                "External or no catering",
            )]);
        }

        let service_fee = round_cost(food as f64 * CATERING_SERVICE_FEE_RATE);
        let tax = round_cost((food + service_fee) as f64 * CATERING_TAX_RATE);

        CategoryBreakdown::from_items(vec![
            LineItem::new(
                "Food & Beverage",
                food,
                format!("{} guests", params.audience_size),
            ),
            LineItem::new("Service Fee (18%)", service_fee, "Gratuity and service"),
            LineItem::new("Tax (8%)", tax, "Local sales tax"),
        ])
    }

    fn services(&self, params: &EventParameters, multiplier: f64) -> CategoryBreakdown {
        let mut seen: Vec<&str> = Vec::new();
        let mut items = Vec::new();
        for code in params.additional_services.iter().map(|code| code.trim()) {
            if code.is_empty() || seen.contains(&code) {
                continue;
            }
            seen.push(code);
            let cost = round_cost(self.tables.service_cost(code) * multiplier);
            items.push(LineItem::new(service_label(code), cost, "Professional service"));
        }
        CategoryBreakdown::from_items(items)
    }

    fn miscellaneous(
        &self,
        params: &EventParameters,
        multiplier: f64,
        subtotal: i64,
    ) -> CategoryBreakdown {
        let mut items = vec![
            LineItem::new(
                "Contingency (10%)",
                round_cost(CONTINGENCY_RATE * subtotal as f64),
                "Unexpected expenses buffer",
            ),
            LineItem::new(
                "Event Insurance",
                round_cost(INSURANCE_BASE * multiplier),
                "Liability coverage",
            ),
        ];
        // Keyed on the event type, not the venue type.
        if params.event_code() == Some(PERMIT_EVENT_TYPE) {
            items.push(LineItem::new(
                "Permits & Licenses",
                round_cost(PERMIT_BASE * multiplier),
                "Required permits",
            ));
        }
        CategoryBreakdown::from_items(items)
    }
}

/// Prices `params` against the built-in tables.
pub fn calculate(params: &EventParameters) -> BudgetResult {
    BudgetEngine::standard().calculate(params)
}

/// Rounds to the nearest integer, halves towards positive infinity.
pub fn round_cost(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// Human readable name for a hyphenated service code (`av-equipment` -> `Av Equipment`).
pub fn service_label(code: &str) -> String {
    code.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> EventParameters {
        EventParameters::default()
            .with_city("hyderabad")
            .with_venue_type("conference-center")
            .with_catering_type("buffet")
            .with_event_type("corporate")
            .with_audience_size(50)
            .with_hours(4.0, 2.0, 1.0)
    }

    #[test]
    fn rounds_halves_up() {
        assert_eq!(round_cost(2.5), 3);
        assert_eq!(round_cost(2.4999), 2);
        assert_eq!(round_cost(-2.5), -2);
        assert_eq!(round_cost(464.70000000000005), 465);
        assert_eq!(round_cost(-0.5), 0);
    }

    #[test]
    fn rounding_does_not_carry_just_below_half() {
        assert_eq!(round_cost(0.49999999999999994), 0);
    }

    #[test]
    fn labels_hyphenated_codes() {
        assert_eq!(service_label("av-equipment"), "Av Equipment");
        assert_eq!(service_label("photography"), "Photography");
        assert_eq!(service_label("a--b"), "A  B");
    }

    #[test]
    fn venue_items_are_always_emitted() {
        let params = scenario_a().with_hours(4.0, 0.0, 0.0);
        let result = calculate(&params);
        let names: Vec<&str> = result.venue.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Venue Rental", "Setup Time", "Cleanup Time"]);
        assert_eq!(result.venue.items[1].cost, 0);
        assert_eq!(result.venue.items[0].description, "4 hours rental");
    }

    #[test]
    fn permits_follow_event_type() {
        let mut params = scenario_a().with_venue_type("outdoor-venue");
        let result = calculate(&params);
        assert_eq!(result.miscellaneous.items.len(), 2);

        params.event_type = Some(PERMIT_EVENT_TYPE.into());
        let result = calculate(&params);
        let permits = result
            .miscellaneous
            .items
            .iter()
            .find(|item| item.name == "Permits & Licenses")
            .expect("permits item");
        assert_eq!(permits.cost, 200);
    }

    #[test]
    fn duplicate_services_are_priced_once() {
        let params = scenario_a()
            .with_service("music")
            .with_service("music")
            .with_service("security");
        let result = calculate(&params);
        assert_eq!(result.services.items.len(), 2);
        assert_eq!(result.services.total, 900);
    }

    #[test]
    fn checked_calculation_rejects_before_computing() {
        let params = scenario_a().with_audience_size(0);
        let err = BudgetEngine::standard()
            .calculate_checked(&params)
            .expect_err("zero audience");
        assert!(matches!(
            err,
            CoreError::InvalidParameter {
                field: "audienceSize",
                ..
            }
        ));
    }
}
