//! Property tests for the budget engine.
//!
//! Case count follows `PROPTEST_CASES` when set.

use evplan_core::calculate;
use evplan_domain::EventParameters;
use proptest::prelude::*;

const CITIES: &[&str] = &["mumbai", "delhi", "hyderabad", "lucknow", "vadodara", "nowhere"];
const VENUES: &[&str] = &["hotel-ballroom", "restaurant", "outdoor-venue", "unknown-hall"];
const CATERING: &[&str] = &["full-service", "buffet", "box-lunch", "coffee-break", "tapas"];
const SERVICES: &[&str] = &["av-equipment", "photography", "music", "security", "fireworks"];
const EVENTS: &[&str] = &["corporate", "wedding", "outdoor-venue"];

fn params_strategy() -> impl Strategy<Value = EventParameters> {
    (
        prop::sample::select(CITIES),
        prop::sample::select(VENUES),
        prop::sample::select(CATERING),
        prop::sample::select(EVENTS),
        1i64..2_000,
        1u32..96,
        0u32..40,
        0u32..40,
        prop::sample::subsequence(SERVICES, 0..=SERVICES.len()),
    )
        .prop_map(
            |(city, venue, catering, event, audience, duration, setup, cleanup, services)| {
                let mut params = EventParameters::default()
                    .with_city(city)
                    .with_venue_type(venue)
                    .with_catering_type(catering)
                    .with_event_type(event)
                    .with_audience_size(audience)
                    .with_hours(
                        f64::from(duration) / 4.0,
                        f64::from(setup) / 4.0,
                        f64::from(cleanup) / 4.0,
                    );
                params.additional_services = services.into_iter().map(String::from).collect();
                params
            },
        )
}

proptest! {
    #[test]
    fn grand_total_is_sum_of_categories(params in params_strategy()) {
        let result = calculate(&params);
        prop_assert_eq!(
            result.grand_total,
            result.venue.total + result.catering.total + result.services.total + result.miscellaneous.total
        );
    }

    #[test]
    fn category_totals_are_sums_of_items(params in params_strategy()) {
        let result = calculate(&params);
        for (_, breakdown) in result.categories() {
            let sum: i64 = breakdown.items.iter().map(|item| item.cost).sum();
            prop_assert_eq!(breakdown.total, sum);
        }
    }

    #[test]
    fn calculation_is_idempotent(params in params_strategy()) {
        prop_assert_eq!(calculate(&params), calculate(&params));
    }

    #[test]
    fn more_guests_never_cost_less(params in params_strategy(), extra in 0i64..500) {
        let smaller = calculate(&params);
        let larger = calculate(&params.clone().with_audience_size(params.audience_size + extra));
        prop_assert!(larger.catering.total >= smaller.catering.total);
        prop_assert!(larger.grand_total >= smaller.grand_total);
    }

    #[test]
    fn valid_inputs_never_produce_negative_items(params in params_strategy()) {
        let result = calculate(&params);
        for (_, breakdown) in result.categories() {
            prop_assert!(breakdown.items.iter().all(|item| item.cost >= 0));
        }
    }
}
