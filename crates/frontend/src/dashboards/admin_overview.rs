//! Admin landing page: headline counts over the operational data plus
//! the most recent orders.

use crate::domain::drivers::data::sample_drivers;
use crate::domain::inventory::data::sample_inventory;
use crate::domain::orders::data::sample_orders;
use crate::domain::orders::ui::list::order_status_tone;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::status_badge::status_badge;
use crate::shared::format::{format_date, format_usd_cents};
use chrono::NaiveDate;
use contracts::domain::driver::DriverStatus;
use contracts::domain::inventory::StockStatus;
use leptos::prelude::*;

/// "Today" for the sample dataset.
fn sample_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 10).expect("valid sample date")
}

const RECENT_ORDERS: usize = 5;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let orders = sample_orders();
    let drivers = sample_drivers();
    let inventory = sample_inventory();

    let today = sample_today();
    let orders_today = orders.iter().filter(|o| o.date == today).count();
    let active_drivers = drivers
        .iter()
        .filter(|d| d.status == DriverStatus::Active)
        .count();
    let low_stock = inventory
        .iter()
        .filter(|i| i.status() == StockStatus::LowStock)
        .count();
    let failed_deliveries = orders
        .iter()
        .filter(|o| o.status.is_terminal_failure())
        .count();

    let mut recent = orders;
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(RECENT_ORDERS);

    view! {
        <div class="content">
            <div class="header">
                <div>
                    <h2>"Dashboard"</h2>
                    <p class="header__description">"Operations at a glance"</p>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Orders today".to_string()
                    icon_name="package".to_string()
                    value=orders_today.to_string()
                />
                <StatCard
                    label="Active drivers".to_string()
                    icon_name="truck".to_string()
                    value=active_drivers.to_string()
                    tone=StatTone::Success
                />
                <StatCard
                    label="Low stock items".to_string()
                    icon_name="boxes".to_string()
                    value=low_stock.to_string()
                    tone=StatTone::Warning
                />
                <StatCard
                    label="Failed deliveries".to_string()
                    icon_name="alert-triangle".to_string()
                    value=failed_deliveries.to_string()
                    tone=StatTone::Danger
                />
            </div>

            <div class="dashboard-section">
                <h3>"Recent orders"</h3>
                <div class="table-container">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Order ID"</th>
                                <th class="table__header-cell">"Customer"</th>
                                <th class="table__header-cell">"Date"</th>
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell">"Amount"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {recent
                                .into_iter()
                                .map(|order| {
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--id">{order.id.clone()}</td>
                                            <td class="table__cell">{order.customer.clone()}</td>
                                            <td class="table__cell">{format_date(order.date)}</td>
                                            <td class="table__cell">
                                                {status_badge(order.status.label(), order_status_tone(order.status))}
                                            </td>
                                            <td class="table__cell table__cell--number">
                                                {format_usd_cents(order.amount_cents)}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
