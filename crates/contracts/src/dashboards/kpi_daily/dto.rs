use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One day of rolled-up KPI metrics for a single warehouse.
///
/// Rows are produced by the data source and never mutated after receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiDailyRow {
    pub day: NaiveDate,
    pub warehouse_id: String,
    pub avg_fulfillment_hours: f64,
    /// Fraction of orders that met their deadline, in `[0, 1]`.
    pub on_time_rate: f64,
    pub units: u64,
}

/// Query accepted by the daily-KPI endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiDailyQuery {
    /// Inclusive range start, ISO `YYYY-MM-DD` on the wire.
    pub start: NaiveDate,
    /// Inclusive range end.
    pub end: NaiveDate,
    /// Warehouses to include. Empty means "all"; consumers must not read
    /// an empty list as "none".
    #[serde(default)]
    pub warehouse_ids: Vec<String>,
}

/// Inclusive calendar date range echoed back in response meta blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// `{ data, meta }` envelope for the daily-KPI endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiDailyResponse {
    pub data: Vec<KpiDailyRow>,
    pub meta: KpiDailyMeta,
}

/// Provenance block attached to every daily-KPI response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiDailyMeta {
    pub total_rows: usize,
    pub date_range: DateRange,
    pub warehouses_included: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpi_row_wire_format_uses_iso_dates_and_snake_case() {
        let row = KpiDailyRow {
            day: NaiveDate::from_ymd_opt(2025, 1, 27).unwrap(),
            warehouse_id: "WH1".to_string(),
            avg_fulfillment_hours: 24.5,
            on_time_rate: 0.875,
            units: 1234,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["day"], "2025-01-27");
        assert_eq!(json["warehouse_id"], "WH1");
        assert_eq!(json["avg_fulfillment_hours"], 24.5);
        assert_eq!(json["on_time_rate"], 0.875);
        assert_eq!(json["units"], 1234);
    }

    #[test]
    fn query_tolerates_missing_warehouse_filter() {
        let query: KpiDailyQuery =
            serde_json::from_str(r#"{"start":"2025-01-01","end":"2025-01-27"}"#).unwrap();
        assert!(query.warehouse_ids.is_empty());
    }
}
