use crate::shared::listview::{contains_ci, Categorized, Searchable, SortableByField};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriverStatus {
    Active,
    OnBreak,
    Inactive,
}

impl DriverStatus {
    pub const ALL: [DriverStatus; 3] = [
        DriverStatus::Active,
        DriverStatus::OnBreak,
        DriverStatus::Inactive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DriverStatus::Active => "Active",
            DriverStatus::OnBreak => "On Break",
            DriverStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub vehicle: String,
    pub status: DriverStatus,
    pub location: Option<GeoPoint>,
    pub deliveries: u32,
    pub rating: f32,
}

impl Searchable for Driver {
    fn matches_search(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
            || contains_ci(&self.id, query)
            || contains_ci(&self.vehicle, query)
    }
}

impl Categorized for Driver {
    fn category_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

impl SortableByField for Driver {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.to_lowercase().cmp(&other.id.to_lowercase()),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "deliveries" => self.deliveries.cmp(&other.deliveries),
            "rating" => self
                .rating
                .partial_cmp(&other.rating)
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listview::{apply, ListViewState};

    fn driver(id: &str, name: &str, vehicle: &str, status: DriverStatus) -> Driver {
        Driver {
            id: id.to_string(),
            name: name.to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            email: "driver@example.com".to_string(),
            vehicle: vehicle.to_string(),
            status,
            location: None,
            deliveries: 0,
            rating: 4.5,
        }
    }

    #[test]
    fn vehicle_is_a_designated_search_field() {
        let drivers = vec![
            driver("DRV-001", "Michael Rodriguez", "White Van - XYZ 1234", DriverStatus::Active),
            driver("DRV-002", "Sarah Lewis", "Blue Sedan - ABC 5678", DriverStatus::Active),
        ];
        let mut state = ListViewState::new();
        state.set_search("sedan");
        let result = apply(&drivers, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "DRV-002");
    }

    #[test]
    fn status_filter_matches_multi_word_label() {
        let drivers = vec![
            driver("DRV-001", "A", "Van", DriverStatus::Active),
            driver("DRV-003", "B", "SUV", DriverStatus::OnBreak),
        ];
        let mut state = ListViewState::new();
        state.set_filter("status", "on break");
        let result = apply(&drivers, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "DRV-003");
    }
}
