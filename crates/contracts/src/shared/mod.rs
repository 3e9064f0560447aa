pub mod format;
pub mod page;
pub mod ui_config;
