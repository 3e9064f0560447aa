mod dashboard;

pub use dashboard::MarketingReport;
