use crate::shared::listview::{contains_ci, Categorized, Searchable, SortableByField};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Stock status is always derived from quantity vs. reorder threshold.
/// It is intentionally not a stored field: a stored copy can drift from
/// the quantities it summarizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    InStock,
    LowStock,
}

impl StockStatus {
    pub const ALL: [StockStatus; 2] = [StockStatus::InStock, StockStatus::LowStock];

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub location: String,
    pub quantity: u32,
    pub min_quantity: u32,
    pub last_updated: NaiveDate,
}

impl InventoryItem {
    pub fn status(&self) -> StockStatus {
        if self.quantity < self.min_quantity {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Fill level relative to twice the reorder threshold, capped at
    /// 100. Drives the stock-level bar in the inventory table.
    pub fn stock_level_percent(&self) -> u32 {
        let capacity = (self.min_quantity.max(1)) * 2;
        ((self.quantity * 100) / capacity).min(100)
    }
}

impl Searchable for InventoryItem {
    fn matches_search(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
            || contains_ci(&self.id, query)
            || contains_ci(&self.location, query)
    }
}

impl Categorized for InventoryItem {
    fn category_value(&self, field: &str) -> Option<String> {
        match field {
            "category" => Some(self.category.clone()),
            "status" => Some(self.status().to_string()),
            _ => None,
        }
    }
}

impl SortableByField for InventoryItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.to_lowercase().cmp(&other.id.to_lowercase()),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "category" => self
                .category
                .to_lowercase()
                .cmp(&other.category.to_lowercase()),
            "quantity" => self.quantity.cmp(&other.quantity),
            "last_updated" => self.last_updated.cmp(&other.last_updated),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listview::{apply, ListViewState};

    fn item(id: &str, quantity: u32, min_quantity: u32) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            name: "Bubble Wrap".to_string(),
            category: "Packaging".to_string(),
            location: "Warehouse B, Shelf 2".to_string(),
            quantity,
            min_quantity,
            last_updated: NaiveDate::from_ymd_opt(2023, 6, 9).expect("valid sample date"),
        }
    }

    #[test]
    fn status_is_consistent_with_quantities() {
        assert_eq!(item("INV-005", 15, 20).status(), StockStatus::LowStock);
        assert_eq!(item("INV-004", 32, 30).status(), StockStatus::InStock);
        // boundary: quantity == min_quantity is still in stock
        assert_eq!(item("INV-009", 30, 30).status(), StockStatus::InStock);
    }

    #[test]
    fn derived_status_participates_in_filtering() {
        let items = vec![item("INV-005", 15, 20), item("INV-004", 32, 30)];
        let mut state = ListViewState::new();
        state.set_filter("status", "low stock");
        let result = apply(&items, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "INV-005");
    }

    #[test]
    fn stock_level_percent_is_capped() {
        assert_eq!(item("INV-001", 500, 100).stock_level_percent(), 100);
        assert_eq!(item("INV-002", 50, 100).stock_level_percent(), 25);
        assert_eq!(item("INV-003", 0, 0).stock_level_percent(), 0);
    }

    #[test]
    fn category_and_status_filters_are_independent() {
        let mut supplies = item("INV-007", 12, 15);
        supplies.category = "Supplies".to_string();
        let items = vec![item("INV-001", 245, 100), supplies];

        let mut state = ListViewState::new();
        state.set_filter("category", "supplies");
        state.set_filter("status", "low stock");
        let result = apply(&items, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "INV-007");
    }
}
