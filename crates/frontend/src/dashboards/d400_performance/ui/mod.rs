pub mod bar_chart;
pub mod dashboard;
pub mod detail_table;
pub mod pie_chart;
pub mod summary_table;

pub use dashboard::PerformanceDashboard;
