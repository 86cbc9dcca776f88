use crate::domain::driver::GeoPoint;
use crate::shared::listview::{contains_ci, Categorized, Searchable, SortableByField};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupStatus {
    Scheduled,
    EnRoute,
    Arrived,
    Completed,
}

impl PickupStatus {
    pub const ALL: [PickupStatus; 4] = [
        PickupStatus::Scheduled,
        PickupStatus::EnRoute,
        PickupStatus::Arrived,
        PickupStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PickupStatus::Scheduled => "Scheduled",
            PickupStatus::EnRoute => "En Route",
            PickupStatus::Arrived => "Arrived",
            PickupStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for PickupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A driver pickup slot at the warehouse. Time fields are display labels
/// ("10:30 AM", "Tomorrow, 9:30 AM") exactly as the schedule presents
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub id: String,
    pub driver_id: String,
    pub driver_name: String,
    pub phone: String,
    pub vehicle: String,
    pub status: PickupStatus,
    pub scheduled_time: String,
    pub completed_time: Option<String>,
    pub packages: u32,
    pub location: Option<GeoPoint>,
    pub eta: Option<String>,
}

impl Searchable for Pickup {
    fn matches_search(&self, query: &str) -> bool {
        contains_ci(&self.id, query)
            || contains_ci(&self.driver_name, query)
            || contains_ci(&self.vehicle, query)
    }
}

impl Categorized for Pickup {
    fn category_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

impl SortableByField for Pickup {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.to_lowercase().cmp(&other.id.to_lowercase()),
            "driver" => self
                .driver_name
                .to_lowercase()
                .cmp(&other.driver_name.to_lowercase()),
            "packages" => self.packages.cmp(&other.packages),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listview::{apply, ListViewState};

    fn pickup(id: &str, driver_name: &str, status: PickupStatus) -> Pickup {
        Pickup {
            id: id.to_string(),
            driver_id: "DRV-001".to_string(),
            driver_name: driver_name.to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            vehicle: "White Van - XYZ 1234".to_string(),
            status,
            scheduled_time: "10:30 AM".to_string(),
            completed_time: None,
            packages: 12,
            location: None,
            eta: None,
        }
    }

    #[test]
    fn search_covers_driver_name() {
        let pickups = vec![
            pickup("PU-001", "Michael Rodriguez", PickupStatus::Arrived),
            pickup("PU-002", "Sarah Lewis", PickupStatus::EnRoute),
        ];
        let mut state = ListViewState::new();
        state.set_search("sarah");
        let result = apply(&pickups, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "PU-002");
    }

    #[test]
    fn en_route_label_filters_case_insensitively() {
        let pickups = vec![
            pickup("PU-001", "A", PickupStatus::Arrived),
            pickup("PU-002", "B", PickupStatus::EnRoute),
        ];
        let mut state = ListViewState::new();
        state.set_filter("status", "EN ROUTE");
        let result = apply(&pickups, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "PU-002");
    }
}
