pub mod charts;
pub mod date_input;
pub mod order_table;
pub mod pagination_controls;
pub mod stat_card;
pub mod ui;
