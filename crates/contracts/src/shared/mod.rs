pub mod listview;
pub mod selection;
