//! Client-side reduction of daily KPI rows.
//!
//! Both the overview and the warehouse detail page run their rows through
//! `summarize`; everything here is a pure function of its input so the
//! reduction can be tested without a browser.

use super::dto::KpiDailyRow;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregate across every row in the query window, regardless of warehouse.
///
/// `None` fields are the "no data" sentinel for an empty row set; the
/// renderer shows a placeholder in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallSummary {
    pub avg_fulfillment_hours: Option<f64>,
    pub on_time_rate: Option<f64>,
    pub total_units: Option<u64>,
}

impl OverallSummary {
    pub fn empty() -> Self {
        Self {
            avg_fulfillment_hours: None,
            on_time_rate: None,
            total_units: None,
        }
    }
}

/// Per-warehouse aggregate across all days in the query window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseSummary {
    pub warehouse_id: String,
    pub avg_fulfillment_hours: f64,
    pub on_time_rate: f64,
    pub units: u64,
}

/// Output of [`summarize`].
#[derive(Debug, Clone, PartialEq)]
pub struct KpiSummary {
    pub overall: OverallSummary,
    /// One entry per warehouse, in first-seen input order.
    pub by_warehouse: Vec<WarehouseSummary>,
}

/// Reduce an ordered sequence of daily KPI rows to the overall and
/// per-warehouse aggregates, in a single pass.
///
/// Overall hour/rate values are plain arithmetic means over the rows (not
/// day- or unit-weighted); units sum. Within a warehouse, the first row
/// seeds the summary and every later row folds in as the running pairwise
/// mean `(stored + incoming) / 2`, while units add up. The pairwise policy
/// is order-dependent and diverges from a true mean beyond two rows; it is
/// kept as-is for compatibility with existing consumers of these numbers.
pub fn summarize(rows: &[KpiDailyRow]) -> KpiSummary {
    if rows.is_empty() {
        return KpiSummary {
            overall: OverallSummary::empty(),
            by_warehouse: Vec::new(),
        };
    }

    let mut hours_sum = 0.0;
    let mut rate_sum = 0.0;
    let mut units_total: u64 = 0;

    let mut by_warehouse: Vec<WarehouseSummary> = Vec::new();
    let mut slot_by_id: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        hours_sum += row.avg_fulfillment_hours;
        rate_sum += row.on_time_rate;
        units_total += row.units;

        match slot_by_id.get(row.warehouse_id.as_str()) {
            Some(&slot) => {
                let entry = &mut by_warehouse[slot];
                entry.avg_fulfillment_hours =
                    (entry.avg_fulfillment_hours + row.avg_fulfillment_hours) / 2.0;
                entry.on_time_rate = (entry.on_time_rate + row.on_time_rate) / 2.0;
                entry.units += row.units;
            }
            None => {
                slot_by_id.insert(row.warehouse_id.as_str(), by_warehouse.len());
                by_warehouse.push(WarehouseSummary {
                    warehouse_id: row.warehouse_id.clone(),
                    avg_fulfillment_hours: row.avg_fulfillment_hours,
                    on_time_rate: row.on_time_rate,
                    units: row.units,
                });
            }
        }
    }

    let n = rows.len() as f64;
    KpiSummary {
        overall: OverallSummary {
            avg_fulfillment_hours: Some(hours_sum / n),
            on_time_rate: Some(rate_sum / n),
            total_units: Some(units_total),
        },
        by_warehouse,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(day: u32, warehouse_id: &str, hours: f64, rate: f64, units: u64) -> KpiDailyRow {
        KpiDailyRow {
            day: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            warehouse_id: warehouse_id.to_string(),
            avg_fulfillment_hours: hours,
            on_time_rate: rate,
            units,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_input_yields_sentinels_and_no_warehouses() {
        let summary = summarize(&[]);
        assert_eq!(summary.overall, OverallSummary::empty());
        assert!(summary.by_warehouse.is_empty());
    }

    #[test]
    fn single_row_summary_equals_the_row() {
        let rows = vec![row(27, "WH1", 24.5, 0.875, 1234)];
        let summary = summarize(&rows);

        assert_close(summary.overall.avg_fulfillment_hours.unwrap(), 24.5);
        assert_close(summary.overall.on_time_rate.unwrap(), 0.875);
        assert_eq!(summary.overall.total_units, Some(1234));

        assert_eq!(summary.by_warehouse.len(), 1);
        let wh = &summary.by_warehouse[0];
        assert_eq!(wh.warehouse_id, "WH1");
        assert_close(wh.avg_fulfillment_hours, 24.5);
        assert_close(wh.on_time_rate, 0.875);
        assert_eq!(wh.units, 1234);
    }

    #[test]
    fn three_warehouse_fixture_matches_dashboard_numbers() {
        let rows = vec![
            row(27, "WH1", 24.5, 0.875, 1234),
            row(27, "WH2", 22.3, 0.912, 987),
            row(27, "WH3", 26.1, 0.845, 567),
        ];
        let summary = summarize(&rows);

        assert_eq!(summary.overall.total_units, Some(2788));
        assert_close(
            summary.overall.avg_fulfillment_hours.unwrap(),
            (24.5 + 22.3 + 26.1) / 3.0,
        );
        // Rounds to 24.3 at the one-decimal display precision.
        let displayed =
            (summary.overall.avg_fulfillment_hours.unwrap() * 10.0).round() / 10.0;
        assert_close(displayed, 24.3);

        // Each warehouse contributed a single row, so its summary is that
        // row unchanged, in input order.
        let ids: Vec<&str> = summary
            .by_warehouse
            .iter()
            .map(|w| w.warehouse_id.as_str())
            .collect();
        assert_eq!(ids, ["WH1", "WH2", "WH3"]);
        assert_close(summary.by_warehouse[1].avg_fulfillment_hours, 22.3);
        assert_eq!(summary.by_warehouse[2].units, 567);
    }

    #[test]
    fn two_rows_fold_to_their_pairwise_mean() {
        let rows = vec![
            row(26, "WH1", 20.0, 0.90, 100),
            row(27, "WH1", 30.0, 0.80, 50),
        ];
        let summary = summarize(&rows);
        let wh = &summary.by_warehouse[0];
        assert_close(wh.avg_fulfillment_hours, 25.0);
        assert_close(wh.on_time_rate, 0.85);
        assert_eq!(wh.units, 150);
    }

    #[test]
    fn third_row_folds_pairwise_not_as_true_mean() {
        let (a, b, c) = (10.0, 20.0, 40.0);
        let rows = vec![
            row(25, "WH1", a, 0.9, 10),
            row(26, "WH1", b, 0.9, 10),
            row(27, "WH1", c, 0.9, 10),
        ];
        let summary = summarize(&rows);
        let wh = &summary.by_warehouse[0];

        // ((a + b) / 2 + c) / 2, not (a + b + c) / 3.
        assert_close(wh.avg_fulfillment_hours, ((a + b) / 2.0 + c) / 2.0);
        assert!((wh.avg_fulfillment_hours - (a + b + c) / 3.0).abs() > 1e-9);
        assert_eq!(wh.units, 30);
    }

    #[test]
    fn grouping_keeps_first_seen_order_with_interleaved_rows() {
        let rows = vec![
            row(25, "WH2", 20.0, 0.9, 10),
            row(25, "WH1", 24.0, 0.8, 20),
            row(26, "WH2", 22.0, 0.7, 30),
            row(26, "WH3", 25.0, 0.6, 40),
            row(27, "WH1", 26.0, 0.5, 50),
        ];
        let summary = summarize(&rows);
        let ids: Vec<&str> = summary
            .by_warehouse
            .iter()
            .map(|w| w.warehouse_id.as_str())
            .collect();
        assert_eq!(ids, ["WH2", "WH1", "WH3"]);
        assert_eq!(summary.by_warehouse[0].units, 40);
        assert_eq!(summary.by_warehouse[1].units, 70);
        assert_eq!(summary.overall.total_units, Some(150));
    }
}
