use crate::shared::listview::{contains_ci, Categorized, Searchable, SortableByField};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackageStatus {
    ReadyForPickup,
    Processing,
    InTransit,
    Delivered,
}

impl PackageStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PackageStatus::ReadyForPickup => "Ready for Pickup",
            PackageStatus::Processing => "Processing",
            PackageStatus::InTransit => "In Transit",
            PackageStatus::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A physical package known to the warehouse scan station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub order_id: String,
    pub status: PackageStatus,
    pub destination: String,
}

impl Searchable for Package {
    fn matches_search(&self, query: &str) -> bool {
        contains_ci(&self.id, query)
            || contains_ci(&self.order_id, query)
            || contains_ci(&self.destination, query)
    }
}

impl Categorized for Package {
    fn category_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

impl SortableByField for Package {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.to_lowercase().cmp(&other.id.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}
