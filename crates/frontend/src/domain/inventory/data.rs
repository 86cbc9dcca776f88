//! Sample warehouse inventory. Stock status is always computed from the
//! quantities, never stored alongside them.

use crate::shared::export::CsvExportable;
use crate::shared::format::format_date;
use chrono::NaiveDate;
use contracts::domain::inventory::InventoryItem;

pub const CATEGORIES: [&str; 3] = ["Packaging", "Supplies", "Equipment"];

fn item(
    id: &str,
    name: &str,
    category: &str,
    location: &str,
    quantity: u32,
    min_quantity: u32,
    updated: (i32, u32, u32),
) -> InventoryItem {
    let (y, m, d) = updated;
    InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        location: location.to_string(),
        quantity,
        min_quantity,
        last_updated: NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date"),
    }
}

pub fn sample_inventory() -> Vec<InventoryItem> {
    vec![
        item("INV-001", "Small Shipping Boxes", "Packaging", "Warehouse A, Shelf 1", 245, 100, (2023, 6, 10)),
        item("INV-002", "Medium Shipping Boxes", "Packaging", "Warehouse A, Shelf 2", 180, 75, (2023, 6, 10)),
        item("INV-003", "Large Shipping Boxes", "Packaging", "Warehouse A, Shelf 3", 120, 50, (2023, 6, 9)),
        item("INV-004", "Packing Tape", "Supplies", "Warehouse B, Shelf 1", 32, 30, (2023, 6, 9)),
        item("INV-005", "Bubble Wrap", "Packaging", "Warehouse B, Shelf 2", 15, 20, (2023, 6, 8)),
        item("INV-006", "Shipping Labels", "Supplies", "Warehouse B, Shelf 3", 500, 200, (2023, 6, 7)),
        item("INV-007", "Thermal Printer Paper", "Supplies", "Warehouse B, Shelf 4", 12, 15, (2023, 6, 6)),
        item("INV-008", "Hand Trucks", "Equipment", "Warehouse C, Area 1", 8, 5, (2023, 6, 5)),
    ]
}

impl CsvExportable for InventoryItem {
    fn headers() -> Vec<&'static str> {
        vec!["Item ID", "Name", "Category", "Location", "Quantity", "Min Quantity", "Status", "Last Updated"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.category.clone(),
            self.location.clone(),
            self.quantity.to_string(),
            self.min_quantity.to_string(),
            self.status().to_string(),
            format_date(self.last_updated),
        ]
    }
}
