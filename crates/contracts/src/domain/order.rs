use crate::shared::listview::{contains_ci, Categorized, Searchable, SortableByField};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Processing,
    InTransit,
    OutForDelivery,
    Delivered,
    FailedDelivery,
    Scheduled,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Processing,
        OrderStatus::InTransit,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::FailedDelivery,
        OrderStatus::Scheduled,
        OrderStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::InTransit => "In Transit",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::FailedDelivery => "Failed Delivery",
            OrderStatus::Scheduled => "Scheduled",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// True for statuses that end an order without a delivery.
    pub fn is_terminal_failure(&self) -> bool {
        matches!(self, OrderStatus::FailedDelivery | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One customer order. Immutable once constructed; the amount is kept in
/// cents and formatted on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub address: String,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub driver: Option<String>,
    pub amount_cents: i64,
}

impl Searchable for Order {
    fn matches_search(&self, query: &str) -> bool {
        contains_ci(&self.id, query)
            || contains_ci(&self.customer, query)
            || contains_ci(&self.address, query)
    }
}

impl Categorized for Order {
    fn category_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.to_string()),
            "driver" => Some(self.driver.clone().unwrap_or_else(|| "Unassigned".into())),
            _ => None,
        }
    }
}

impl SortableByField for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.to_lowercase().cmp(&other.id.to_lowercase()),
            "customer" => self
                .customer
                .to_lowercase()
                .cmp(&other.customer.to_lowercase()),
            "date" => self.date.cmp(&other.date),
            "status" => self.status.label().cmp(other.status.label()),
            "amount" => self.amount_cents.cmp(&other.amount_cents),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listview::{apply, ListViewState};

    fn order(id: &str, customer: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            customer: customer.to_string(),
            address: "123 Main St, New York, NY".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 6, 10).expect("valid sample date"),
            status,
            driver: None,
            amount_cents: 12_499,
        }
    }

    #[test]
    fn query_and_status_filters_compose() {
        let orders = vec![
            order("ORD-1234", "John Doe", OrderStatus::Delivered),
            order("ORD-1235", "Jane Smith", OrderStatus::InTransit),
        ];

        let mut state = ListViewState::new();
        state.set_search("ORD-123");
        state.set_filter("status", "all");
        assert_eq!(apply(&orders, &state).len(), 2);

        state.set_filter("status", "delivered");
        let delivered = apply(&orders, &state);
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].id, "ORD-1234");

        state.set_search("zzz");
        assert!(apply(&orders, &state).is_empty());
    }

    #[test]
    fn unassigned_driver_is_a_filterable_category() {
        let o = order("ORD-1236", "Robert Johnson", OrderStatus::Processing);
        assert_eq!(o.category_value("driver").as_deref(), Some("Unassigned"));
    }

    #[test]
    fn terminal_failure_statuses() {
        assert!(OrderStatus::Cancelled.is_terminal_failure());
        assert!(OrderStatus::FailedDelivery.is_terminal_failure());
        assert!(!OrderStatus::Delivered.is_terminal_failure());
    }
}
