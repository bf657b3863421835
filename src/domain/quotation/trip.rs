//! Trip details value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// The trip a quotation is priced for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TripDetails {
    pub trip_name: String,
    pub destinations: Vec<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    /// Total travelers on the trip.
    pub participants: u32,
    pub number_of_groups: Option<u32>,
    pub group_size: Option<u32>,
}

impl TripDetails {
    /// Trip duration in whole days, if both dates are set.
    ///
    /// Returns None for missing or inverted date ranges.
    pub fn duration_days(&self) -> Option<u32> {
        let (start, end) = (self.start_date?, self.end_date?);
        let days = start.days_until(&end);
        if days >= 0 {
            Some(days as u32)
        } else {
            None
        }
    }

    /// Returns true when every field the customer-and-trip step requires is
    /// filled in: a trip name, at least one destination, both dates, and a
    /// positive participant count.
    pub fn is_complete(&self) -> bool {
        !self.trip_name.trim().is_empty()
            && self.destinations.iter().any(|d| !d.trim().is_empty())
            && self.start_date.is_some()
            && self.end_date.is_some()
            && self.participants > 0
    }
}
