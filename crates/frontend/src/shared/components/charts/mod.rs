//! SVG charts for dashboard breakdowns.

pub mod bar_chart;
pub mod line_chart;
pub mod scale;

pub use bar_chart::BarChart;
pub use line_chart::LineChart;
