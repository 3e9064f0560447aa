mod dashboard;

pub use dashboard::DatasetOverview;
