pub mod admin_overview;
pub mod warehouse_home;
