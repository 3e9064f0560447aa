pub mod d400_dataset_overview;
pub mod d401_kpi_dashboard;
pub mod d402_marketing_report;

pub use d400_dataset_overview::ui::DatasetOverview;
pub use d401_kpi_dashboard::ui::KpiDashboard;
pub use d402_marketing_report::ui::MarketingReport;
