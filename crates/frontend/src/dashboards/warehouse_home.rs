//! Warehouse landing page: the day's pickup load and what needs
//! restocking.

use crate::domain::inventory::data::sample_inventory;
use crate::domain::packages::data::sample_packages;
use crate::domain::pickups::data::todays_pickups;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::status_badge::status_badge;
use crate::shared::icons::icon;
use contracts::domain::inventory::StockStatus;
use contracts::domain::package::PackageStatus;
use leptos::prelude::*;

#[component]
pub fn WarehouseHome() -> impl IntoView {
    let pickups = todays_pickups();
    let packages = sample_packages();
    let inventory = sample_inventory();

    let pickups_today = pickups.len();
    let packages_waiting: usize = pickups.iter().map(|p| p.packages as usize).sum();
    let ready_for_pickup = packages
        .iter()
        .filter(|p| p.status == PackageStatus::ReadyForPickup)
        .count();

    let low_stock: Vec<_> = inventory
        .into_iter()
        .filter(|i| i.status() == StockStatus::LowStock)
        .collect();
    let low_stock_count = low_stock.len();

    view! {
        <div class="content">
            <div class="header">
                <div>
                    <h2>"Warehouse"</h2>
                    <p class="header__description">"Today's workload"</p>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Pickups today".to_string()
                    icon_name="clipboard".to_string()
                    value=pickups_today.to_string()
                    subtitle=format!("{} packages to hand off", packages_waiting)
                />
                <StatCard
                    label="Ready for pickup".to_string()
                    icon_name="package".to_string()
                    value=ready_for_pickup.to_string()
                    tone=StatTone::Success
                />
                <StatCard
                    label="Low stock items".to_string()
                    icon_name="boxes".to_string()
                    value=low_stock_count.to_string()
                    tone={if low_stock_count > 0 { StatTone::Warning } else { StatTone::Neutral }}
                />
            </div>

            <div class="dashboard-section">
                <h3>"Needs restocking"</h3>
                {if low_stock.is_empty() {
                    view! {
                        <div class="empty-state">
                            {icon("check-circle")}
                            <p>"All items are sufficiently stocked."</p>
                        </div>
                    }
                    .into_any()
                } else {
                    low_stock
                        .into_iter()
                        .map(|item| {
                            view! {
                                <div class="restock-row">
                                    {icon("alert-triangle")}
                                    <div class="restock-row__body">
                                        <div>{item.name.clone()}</div>
                                        <div class="restock-row__meta">
                                            {format!(
                                                "{} on hand, minimum {} - {}",
                                                item.quantity, item.min_quantity, item.location,
                                            )}
                                        </div>
                                    </div>
                                    {status_badge(item.status().label(), "danger")}
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}
