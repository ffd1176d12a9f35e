pub mod data_quality;
pub mod kpi_daily;
