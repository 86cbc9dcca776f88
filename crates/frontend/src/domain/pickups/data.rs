//! Sample pickup schedule, grouped the way the warehouse works the day:
//! today's queue, the upcoming slate, and what is already done.

use contracts::domain::driver::GeoPoint;
use contracts::domain::pickup::{Pickup, PickupStatus};

#[allow(clippy::too_many_arguments)]
fn pickup(
    id: &str,
    driver_id: &str,
    driver_name: &str,
    phone: &str,
    vehicle: &str,
    status: PickupStatus,
    scheduled_time: &str,
    completed_time: Option<&str>,
    packages: u32,
    location: Option<(f64, f64)>,
    eta: Option<&str>,
) -> Pickup {
    Pickup {
        id: id.to_string(),
        driver_id: driver_id.to_string(),
        driver_name: driver_name.to_string(),
        phone: phone.to_string(),
        vehicle: vehicle.to_string(),
        status,
        scheduled_time: scheduled_time.to_string(),
        completed_time: completed_time.map(str::to_string),
        packages,
        location: location.map(|(lat, lng)| GeoPoint { lat, lng }),
        eta: eta.map(str::to_string),
    }
}

pub fn todays_pickups() -> Vec<Pickup> {
    vec![
        pickup(
            "PU-001",
            "DRV-001",
            "Michael Rodriguez",
            "+1 (555) 123-4567",
            "White Van - XYZ 1234",
            PickupStatus::Arrived,
            "10:30 AM",
            None,
            12,
            Some((40.7128, -74.006)),
            Some("Now"),
        ),
        pickup(
            "PU-002",
            "DRV-002",
            "Sarah Lewis",
            "+1 (555) 234-5678",
            "Blue Sedan - ABC 5678",
            PickupStatus::EnRoute,
            "11:45 AM",
            None,
            8,
            Some((40.72, -74.01)),
            Some("15 minutes"),
        ),
        pickup(
            "PU-003",
            "DRV-003",
            "James Thompson",
            "+1 (555) 345-6789",
            "Silver SUV - DEF 9012",
            PickupStatus::Scheduled,
            "2:15 PM",
            None,
            15,
            None,
            Some("3 hours"),
        ),
    ]
}

pub fn upcoming_pickups() -> Vec<Pickup> {
    vec![
        pickup(
            "PU-004",
            "DRV-004",
            "Emily Davis",
            "+1 (555) 456-7890",
            "Red Hatchback - GHI 3456",
            PickupStatus::Scheduled,
            "Tomorrow, 9:30 AM",
            None,
            10,
            None,
            None,
        ),
        pickup(
            "PU-005",
            "DRV-006",
            "Jennifer Brown",
            "+1 (555) 678-9012",
            "Green SUV - MNO 1234",
            PickupStatus::Scheduled,
            "Tomorrow, 11:00 AM",
            None,
            6,
            None,
            None,
        ),
        pickup(
            "PU-006",
            "DRV-005",
            "David Wilson",
            "+1 (555) 567-8901",
            "Black Van - JKL 7890",
            PickupStatus::Scheduled,
            "Tomorrow, 1:30 PM",
            None,
            11,
            None,
            None,
        ),
    ]
}

pub fn completed_pickups() -> Vec<Pickup> {
    vec![
        pickup(
            "PU-007",
            "DRV-007",
            "Robert Martinez",
            "+1 (555) 789-0123",
            "Gray Sedan - PQR 5678",
            PickupStatus::Completed,
            "Today, 8:15 AM",
            Some("Today, 8:20 AM"),
            9,
            None,
            None,
        ),
        pickup(
            "PU-008",
            "DRV-008",
            "Lisa Johnson",
            "+1 (555) 890-1234",
            "Yellow Van - STU 9012",
            PickupStatus::Completed,
            "Yesterday, 3:45 PM",
            Some("Yesterday, 3:50 PM"),
            14,
            None,
            None,
        ),
    ]
}
