//! Sample driver data. Built once at page creation; never mutated.

use crate::shared::export::CsvExportable;
use crate::shared::format::format_rating;
use contracts::domain::driver::{Driver, DriverStatus, GeoPoint};

#[allow(clippy::too_many_arguments)]
fn driver(
    id: &str,
    name: &str,
    phone: &str,
    email: &str,
    vehicle: &str,
    status: DriverStatus,
    location: Option<(f64, f64)>,
    deliveries: u32,
    rating: f32,
) -> Driver {
    Driver {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        vehicle: vehicle.to_string(),
        status,
        location: location.map(|(lat, lng)| GeoPoint { lat, lng }),
        deliveries,
        rating,
    }
}

pub fn sample_drivers() -> Vec<Driver> {
    vec![
        driver(
            "DRV-001",
            "Michael Rodriguez",
            "+1 (555) 123-4567",
            "michael.r@example.com",
            "White Van - XYZ 1234",
            DriverStatus::Active,
            Some((40.7128, -74.006)),
            12,
            4.8,
        ),
        driver(
            "DRV-002",
            "Sarah Lewis",
            "+1 (555) 234-5678",
            "sarah.l@example.com",
            "Blue Sedan - ABC 5678",
            DriverStatus::Active,
            Some((40.72, -74.01)),
            8,
            4.9,
        ),
        driver(
            "DRV-003",
            "James Thompson",
            "+1 (555) 345-6789",
            "james.t@example.com",
            "Silver SUV - DEF 9012",
            DriverStatus::OnBreak,
            Some((40.715, -73.995)),
            5,
            4.7,
        ),
        driver(
            "DRV-004",
            "Emily Davis",
            "+1 (555) 456-7890",
            "emily.d@example.com",
            "Red Hatchback - GHI 3456",
            DriverStatus::Active,
            Some((40.725, -74.015)),
            10,
            4.6,
        ),
        driver(
            "DRV-005",
            "David Wilson",
            "+1 (555) 567-8901",
            "david.w@example.com",
            "Black Van - JKL 7890",
            DriverStatus::Inactive,
            None,
            0,
            0.0,
        ),
        driver(
            "DRV-006",
            "Jennifer Brown",
            "+1 (555) 678-9012",
            "jennifer.b@example.com",
            "Green SUV - MNO 1234",
            DriverStatus::Active,
            Some((40.718, -74.02)),
            7,
            4.9,
        ),
        driver(
            "DRV-007",
            "Robert Martinez",
            "+1 (555) 789-0123",
            "robert.m@example.com",
            "Gray Sedan - PQR 5678",
            DriverStatus::Active,
            Some((40.722, -73.99)),
            9,
            4.8,
        ),
    ]
}

impl CsvExportable for Driver {
    fn headers() -> Vec<&'static str> {
        vec!["Driver ID", "Name", "Phone", "Email", "Vehicle", "Status", "Deliveries", "Rating"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.vehicle.clone(),
            self.status.to_string(),
            self.deliveries.to_string(),
            format_rating(self.rating),
        ]
    }
}
