pub mod components;
pub mod export;
pub mod format;
pub mod icons;
pub mod list_utils;
