//! Budget breakdown types produced by the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four groupings a budget is split into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Venue,
    Catering,
    Services,
    Miscellaneous,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 4] = [
        BudgetCategory::Venue,
        BudgetCategory::Catering,
        BudgetCategory::Services,
        BudgetCategory::Miscellaneous,
    ];

    /// Section heading used by reports.
    pub fn title(self) -> &'static str {
        match self {
            BudgetCategory::Venue => "Venue & Facilities",
            BudgetCategory::Catering => "Catering & Service",
            BudgetCategory::Services => "Additional Services",
            BudgetCategory::Miscellaneous => "Miscellaneous",
        }
    }

    pub fn from_code(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "venue" => Some(BudgetCategory::Venue),
            "catering" => Some(BudgetCategory::Catering),
            "services" => Some(BudgetCategory::Services),
            "miscellaneous" | "misc" => Some(BudgetCategory::Miscellaneous),
            _ => None,
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetCategory::Venue => "venue",
            BudgetCategory::Catering => "catering",
            BudgetCategory::Services => "services",
            BudgetCategory::Miscellaneous => "miscellaneous",
        };
        f.pad(label)
    }
}

/// A single named, costed entry within a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    pub name: String,
    pub cost: i64,
    pub description: String,
}

impl LineItem {
    pub fn new(name: impl Into<String>, cost: i64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cost,
            description: description.into(),
        }
    }
}

/// Line items of one category together with their exact sum.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryBreakdown {
    pub total: i64,
    pub items: Vec<LineItem>,
}

impl CategoryBreakdown {
    /// Builds a breakdown whose total is the sum of the given items.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let total = items.iter().map(|item| item.cost).sum();
        Self { total, items }
    }

    pub fn push(&mut self, item: LineItem) {
        self.total += item.cost;
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Full cost breakdown for one event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResult {
    pub venue: CategoryBreakdown,
    pub catering: CategoryBreakdown,
    pub services: CategoryBreakdown,
    pub miscellaneous: CategoryBreakdown,
    pub grand_total: i64,
}

impl BudgetResult {
    /// The all-zero result returned for incomplete parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_categories(
        venue: CategoryBreakdown,
        catering: CategoryBreakdown,
        services: CategoryBreakdown,
        miscellaneous: CategoryBreakdown,
    ) -> Self {
        let mut result = Self {
            venue,
            catering,
            services,
            miscellaneous,
            grand_total: 0,
        };
        result.recompute_grand_total();
        result
    }

    pub fn category(&self, category: BudgetCategory) -> &CategoryBreakdown {
        match category {
            BudgetCategory::Venue => &self.venue,
            BudgetCategory::Catering => &self.catering,
            BudgetCategory::Services => &self.services,
            BudgetCategory::Miscellaneous => &self.miscellaneous,
        }
    }

    pub fn category_mut(&mut self, category: BudgetCategory) -> &mut CategoryBreakdown {
        match category {
            BudgetCategory::Venue => &mut self.venue,
            BudgetCategory::Catering => &mut self.catering,
            BudgetCategory::Services => &mut self.services,
            BudgetCategory::Miscellaneous => &mut self.miscellaneous,
        }
    }

    /// Categories paired with their breakdowns in report order.
    pub fn categories(&self) -> impl Iterator<Item = (BudgetCategory, &CategoryBreakdown)> {
        BudgetCategory::ALL
            .into_iter()
            .map(move |category| (category, self.category(category)))
    }

    pub fn recompute_grand_total(&mut self) {
        self.grand_total = self.venue.total
            + self.catering.total
            + self.services.total
            + self.miscellaneous.total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_total_tracks_items() {
        let mut breakdown = CategoryBreakdown::from_items(vec![
            LineItem::new("Venue Rental", 1500, "4 hours rental"),
            LineItem::new("Setup Time", 200, "2 hours"),
        ]);
        breakdown.push(LineItem::new("Cleanup Time", 80, "1 hours"));
        assert_eq!(breakdown.total, 1780);
        assert_eq!(breakdown.items.len(), 3);
    }

    #[test]
    fn result_serializes_with_camel_case_total() {
        let result = BudgetResult::from_categories(
            CategoryBreakdown::from_items(vec![LineItem::new("Venue Rental", 10, "")]),
            CategoryBreakdown::default(),
            CategoryBreakdown::default(),
            CategoryBreakdown::default(),
        );
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["grandTotal"], 10);
        assert_eq!(json["venue"]["total"], 10);
    }

    #[test]
    fn category_codes_parse_case_insensitively() {
        assert_eq!(BudgetCategory::from_code("Misc"), Some(BudgetCategory::Miscellaneous));
        assert_eq!(BudgetCategory::from_code(" venue "), Some(BudgetCategory::Venue));
        assert_eq!(BudgetCategory::from_code("décor"), None);
    }
}
