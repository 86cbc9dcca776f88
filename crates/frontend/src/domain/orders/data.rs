//! Sample order data. Built once at page creation; never mutated.

use crate::shared::export::CsvExportable;
use crate::shared::format::{format_date, format_usd_cents};
use chrono::NaiveDate;
use contracts::domain::order::{Order, OrderStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

fn order(
    id: &str,
    customer: &str,
    address: &str,
    d: NaiveDate,
    status: OrderStatus,
    driver: Option<&str>,
    amount_cents: i64,
) -> Order {
    Order {
        id: id.to_string(),
        customer: customer.to_string(),
        address: address.to_string(),
        date: d,
        status,
        driver: driver.map(str::to_string),
        amount_cents,
    }
}

pub fn sample_orders() -> Vec<Order> {
    vec![
        order(
            "ORD-1234",
            "John Doe",
            "123 Main St, New York, NY",
            date(2023, 6, 10),
            OrderStatus::Delivered,
            Some("Michael R."),
            12_499,
        ),
        order(
            "ORD-1235",
            "Jane Smith",
            "456 Park Ave, New York, NY",
            date(2023, 6, 10),
            OrderStatus::InTransit,
            Some("Sarah L."),
            8_950,
        ),
        order(
            "ORD-1236",
            "Robert Johnson",
            "789 Broadway, New York, NY",
            date(2023, 6, 10),
            OrderStatus::Processing,
            None,
            21_075,
        ),
        order(
            "ORD-1237",
            "Emily Davis",
            "321 5th Ave, New York, NY",
            date(2023, 6, 9),
            OrderStatus::Delivered,
            Some("Michael R."),
            5_620,
        ),
        order(
            "ORD-1238",
            "Michael Wilson",
            "654 Madison Ave, New York, NY",
            date(2023, 6, 9),
            OrderStatus::FailedDelivery,
            Some("James T."),
            14_500,
        ),
        order(
            "ORD-1239",
            "Sophia Martinez",
            "987 Lexington Ave, New York, NY",
            date(2023, 6, 9),
            OrderStatus::Scheduled,
            None,
            7_830,
        ),
        order(
            "ORD-1240",
            "Daniel Taylor",
            "135 West End Ave, New York, NY",
            date(2023, 6, 8),
            OrderStatus::Delivered,
            Some("Sarah L."),
            19_245,
        ),
        order(
            "ORD-1241",
            "Olivia Brown",
            "246 East 42nd St, New York, NY",
            date(2023, 6, 8),
            OrderStatus::Cancelled,
            None,
            0,
        ),
        order(
            "ORD-1242",
            "William Anderson",
            "753 3rd Ave, New York, NY",
            date(2023, 6, 8),
            OrderStatus::Delivered,
            Some("James T."),
            6_780,
        ),
        order(
            "ORD-1243",
            "Ava Thomas",
            "951 7th Ave, New York, NY",
            date(2023, 6, 7),
            OrderStatus::Delivered,
            Some("Michael R."),
            13_425,
        ),
    ]
}

impl CsvExportable for Order {
    fn headers() -> Vec<&'static str> {
        vec!["Order ID", "Customer", "Address", "Date", "Status", "Driver", "Amount"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.customer.clone(),
            self.address.clone(),
            format_date(self.date),
            self.status.to_string(),
            self.driver.clone().unwrap_or_else(|| "Unassigned".into()),
            format_usd_cents(self.amount_cents),
        ]
    }
}
