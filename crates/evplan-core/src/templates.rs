//! Quick-start templates for the budget form.

use evplan_domain::BudgetUpdate;

/// A named preset of budget form values.
#[derive(Debug, Clone, PartialEq)]
pub struct EventTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub values: BudgetUpdate,
}

struct Preset {
    id: &'static str,
    name: &'static str,
    city: &'static str,
    audience_size: i64,
    event_type: &'static str,
    venue_type: &'static str,
    catering_type: &'static str,
    duration: f64,
    services: &'static [&'static str],
}

const PRESETS: &[Preset] = &[
    Preset {
        id: "corporate-meeting",
        name: "Corporate Meeting",
        city: "new-york",
        audience_size: 50,
        event_type: "corporate",
        venue_type: "conference-center",
        catering_type: "coffee-break",
        duration: 4.0,
        services: &["av-equipment", "parking"],
    },
    Preset {
        id: "wedding-reception",
        name: "Wedding Reception",
        city: "los-angeles",
        audience_size: 150,
        event_type: "wedding",
        venue_type: "hotel-ballroom",
        catering_type: "plated-dinner",
        duration: 8.0,
        services: &["photography", "music", "flowers"],
    },
    Preset {
        id: "academic-conference",
        name: "Academic Conference",
        city: "chicago",
        audience_size: 200,
        event_type: "academic",
        venue_type: "university-hall",
        catering_type: "buffet",
        duration: 6.0,
        services: &["av-equipment", "registration"],
    },
    Preset {
        id: "product-launch",
        name: "Product Launch",
        city: "san-diego",
        audience_size: 100,
        event_type: "product-launch",
        venue_type: "rooftop-venue",
        catering_type: "cocktail",
        duration: 4.0,
        services: &["av-equipment", "photography", "security"],
    },
];

impl Preset {
    fn to_template(&self) -> EventTemplate {
        EventTemplate {
            id: self.id,
            name: self.name,
            values: BudgetUpdate {
                city: Some(self.city.into()),
                audience_size: Some(self.audience_size),
                event_type: Some(self.event_type.into()),
                venue_type: Some(self.venue_type.into()),
                catering_type: Some(self.catering_type.into()),
                duration: Some(self.duration),
                additional_services: Some(self.services.iter().map(|s| s.to_string()).collect()),
                ..BudgetUpdate::default()
            },
        }
    }
}

/// All templates in display order.
pub fn templates() -> Vec<EventTemplate> {
    PRESETS.iter().map(Preset::to_template).collect()
}

pub fn find_template(id: &str) -> Option<EventTemplate> {
    let id = id.trim();
    PRESETS
        .iter()
        .find(|preset| preset.id.eq_ignore_ascii_case(id))
        .map(Preset::to_template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate;
    use evplan_domain::BudgetForm;

    #[test]
    fn lists_four_templates() {
        let ids: Vec<&str> = templates().iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            [
                "corporate-meeting",
                "wedding-reception",
                "academic-conference",
                "product-launch"
            ]
        );
    }

    #[test]
    fn template_merges_over_form() {
        let mut form = BudgetForm {
            special_requirements: "wheelchair access".into(),
            setup_time: 3.0,
            ..BudgetForm::default()
        };
        let template = find_template("Wedding-Reception").expect("template");
        template.values.apply_to(&mut form);
        assert_eq!(form.venue_type, "hotel-ballroom");
        assert_eq!(form.audience_size, 150);
        assert_eq!(form.setup_time, 3.0);
        assert_eq!(form.special_requirements, "wheelchair access");
        assert!(form.is_ready());
    }

    #[test]
    fn template_cities_price_at_neutral_multiplier() {
        let mut form = BudgetForm::default();
        find_template("corporate-meeting")
            .expect("template")
            .values
            .apply_to(&mut form);
        let result = calculate(&form.to_parameters());
        // 1500 + 200 + 80 venue, coffee-break 15 * 50 = 750 food.
        assert_eq!(result.venue.total, 1780);
        assert_eq!(result.catering.items[0].cost, 750);
        assert_eq!(result.services.total, 1000);
    }
}
