pub mod assignments;
pub mod details;
pub mod list;
pub mod track;
