//! Page content registry - single source of truth for mapping a page key
//! to its view. All page keys are collected here in one place.

use crate::dashboards::admin_overview::AdminDashboard;
use crate::dashboards::warehouse_home::WarehouseHome;
use crate::domain::drivers::ui::list::DriversList;
use crate::domain::inventory::ui::list::InventoryList;
use crate::domain::orders::ui::assignments::DriverAssignments;
use crate::domain::orders::ui::list::OrdersList;
use crate::domain::orders::ui::track::TrackOrderPage;
use crate::domain::pickups::ui::list::PickupsList;
use crate::usecases::scan::ui::ScanPackagesPage;
use leptos::prelude::*;

/// Renders the page content for a key, or a placeholder for unknown
/// keys.
pub fn render_page_content(key: &str) -> AnyView {
    match key {
        "admin_dashboard" => view! { <AdminDashboard /> }.into_any(),
        "admin_orders" => view! { <OrdersList /> }.into_any(),
        "admin_drivers" => view! { <DriversList /> }.into_any(),

        "warehouse_home" => view! { <WarehouseHome /> }.into_any(),
        "warehouse_scan" => view! { <ScanPackagesPage /> }.into_any(),
        "warehouse_pickups" => view! { <PickupsList /> }.into_any(),
        "warehouse_inventory" => view! { <InventoryList /> }.into_any(),

        "driver_assignments" => view! { <DriverAssignments /> }.into_any(),
        "customer_track" => view! { <TrackOrderPage /> }.into_any(),

        unknown => {
            log::warn!("render_page_content: unknown page key '{}'", unknown);
            view! {
                <div class="content">
                    <div class="empty-state">
                        <p>"This page does not exist."</p>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
