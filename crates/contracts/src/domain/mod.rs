pub mod driver;
pub mod inventory;
pub mod order;
pub mod package;
pub mod pickup;
