//! Tab labels - single source of truth for page titles.

/// Returns the readable tab title for a page key.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Admin ─────────────────────────────────────────────────────────
        "admin_dashboard" => "Dashboard",
        "admin_orders" => "Orders",
        "admin_drivers" => "Drivers",

        // ── Warehouse ─────────────────────────────────────────────────────
        "warehouse_home" => "Warehouse Home",
        "warehouse_scan" => "Scan Packages",
        "warehouse_pickups" => "Upcoming Pickups",
        "warehouse_inventory" => "Inventory Status",

        // ── Driver / Customer ─────────────────────────────────────────────
        "driver_assignments" => "My Assignments",
        "customer_track" => "Track Order",

        _ => "Unknown Page",
    }
}
