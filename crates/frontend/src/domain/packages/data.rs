//! Packages known to the scan station.

use contracts::domain::package::{Package, PackageStatus};

fn package(id: &str, order_id: &str, status: PackageStatus, destination: &str) -> Package {
    Package {
        id: id.to_string(),
        order_id: order_id.to_string(),
        status,
        destination: destination.to_string(),
    }
}

pub fn sample_packages() -> Vec<Package> {
    vec![
        package("PKG-001", "ORD-7829", PackageStatus::ReadyForPickup, "123 Main St, Anytown"),
        package("PKG-002", "ORD-7845", PackageStatus::Processing, "456 Oak Ave, Somewhere"),
        package("PKG-003", "ORD-7862", PackageStatus::Delivered, "789 Pine Rd, Elsewhere"),
        package("PKG-004", "ORD-7890", PackageStatus::InTransit, "101 Maple Dr, Nowhere"),
        package("PKG-005", "ORD-7912", PackageStatus::ReadyForPickup, "202 Cedar Ln, Anywhere"),
    ]
}
