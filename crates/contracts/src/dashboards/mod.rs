pub mod d400_dataset_overview;
pub mod d401_kpi_dashboard;
pub mod d402_marketing_report;
