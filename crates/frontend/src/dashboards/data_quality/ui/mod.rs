mod dashboard;

pub use dashboard::DataQualityDashboard;
