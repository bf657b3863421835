//! Day-by-day itinerary model.
//!
//! An alternative to the flat service list: the agent plans each day's
//! activities individually and the calculator accumulates those instead.

use serde::{Deserialize, Serialize};

use crate::domain::quotation::ServiceCategory;

/// One plannable activity on a specific itinerary day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayActivity {
    pub name: String,
    pub description: String,
    pub category: ServiceCategory,
    /// Client-facing price for the whole group.
    pub price: f64,
    /// True when the activity is in client-facing scope.
    pub is_included: bool,
}

impl DayActivity {
    /// Creates an in-scope activity priced for the whole group.
    pub fn new(name: impl Into<String>, category: ServiceCategory, price: f64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category,
            price: price.max(0.0),
            is_included: true,
        }
    }

    /// Marks the activity as out of client-facing scope.
    pub fn excluded(mut self) -> Self {
        self.is_included = false;
        self
    }
}

/// One day of a day-by-day itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based position within the trip.
    pub day_number: u32,
    pub title: String,
    pub activities: Vec<DayActivity>,
}

impl ItineraryDay {
    /// Creates an empty day.
    pub fn new(day_number: u32, title: impl Into<String>) -> Self {
        Self {
            day_number,
            title: title.into(),
            activities: Vec::new(),
        }
    }
}

/// Day-by-day plan for a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DayPlan {
    pub days: Vec<ItineraryDay>,
}

impl DayPlan {
    /// Returns true when at least one day carries at least one activity.
    pub fn has_activities(&self) -> bool {
        self.days.iter().any(|day| !day.activities.is_empty())
    }

    /// Iterates over every activity across all days.
    pub fn activities(&self) -> impl Iterator<Item = &DayActivity> {
        self.days.iter().flat_map(|day| day.activities.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_plan_has_no_activities() {
        assert!(!DayPlan::default().has_activities());
    }

    #[test]
    fn plan_with_empty_days_has_no_activities() {
        let plan = DayPlan {
            days: vec![ItineraryDay::new(1, "Arrival")],
        };
        assert!(!plan.has_activities());
    }

    #[test]
    fn plan_with_one_activity_validates() {
        let mut day = ItineraryDay::new(1, "Arrival");
        day.activities.push(DayActivity::new(
            "City walking tour",
            ServiceCategory::Sightseeing,
            75.0,
        ));
        let plan = DayPlan { days: vec![day] };
        assert!(plan.has_activities());
        assert_eq!(plan.activities().count(), 1);
    }

    #[test]
    fn negative_activity_price_clamps_to_zero() {
        let activity = DayActivity::new("Oops", ServiceCategory::Other, -10.0);
        assert_eq!(activity.price, 0.0);
    }
}
