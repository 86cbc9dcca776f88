pub mod drivers;
pub mod inventory;
pub mod orders;
pub mod packages;
pub mod pickups;
