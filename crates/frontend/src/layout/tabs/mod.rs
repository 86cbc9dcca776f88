pub mod registry;
pub mod tab_labels;
