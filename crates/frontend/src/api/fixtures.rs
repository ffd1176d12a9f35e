//! Session-fixed fixture tables behind the mock transport.
//!
//! KPI rows are generated relative to the current day so the default
//! trailing-30-day window is always populated. All values are derived
//! arithmetically from the day offset and warehouse slot, so reloading a
//! page yields the same numbers within a session.

use chrono::{Duration, NaiveDate, Utc};
use contracts::dashboards::data_quality::{ModelTest, SourceFreshness, TestStatus};
use contracts::dashboards::kpi_daily::KpiDailyRow;
use contracts::domain::order::OrderRow;
use contracts::domain::warehouse::Warehouse;
use once_cell::sync::Lazy;

/// Days of KPI history to generate; a little wider than the default query
/// window so custom ranges near its edges still return rows.
const HISTORY_DAYS: i64 = 35;

pub static WAREHOUSES: Lazy<Vec<Warehouse>> = Lazy::new(|| {
    vec![
        Warehouse {
            warehouse_id: "WH1".to_string(),
            city: "Atlanta".to_string(),
            capacity_units: 100_000,
        },
        Warehouse {
            warehouse_id: "WH2".to_string(),
            city: "Chicago".to_string(),
            capacity_units: 150_000,
        },
        Warehouse {
            warehouse_id: "WH3".to_string(),
            city: "Dallas".to_string(),
            capacity_units: 120_000,
        },
    ]
});

pub static KPI_DAILY: Lazy<Vec<KpiDailyRow>> = Lazy::new(|| {
    let today = Utc::now().date_naive();
    let mut rows = Vec::new();
    for offset in (0..HISTORY_DAYS).rev() {
        let day = today - Duration::days(offset);
        for (slot, warehouse) in WAREHOUSES.iter().enumerate() {
            rows.push(kpi_row(day, offset, slot, &warehouse.warehouse_id));
        }
    }
    rows
});

fn kpi_row(day: NaiveDate, offset: i64, slot: usize, warehouse_id: &str) -> KpiDailyRow {
    let (base_hours, base_rate, base_units) = match slot {
        0 => (24.5, 0.875, 1234_i64),
        1 => (22.3, 0.912, 987),
        _ => (26.1, 0.845, 567),
    };
    // Per-day wobble in [-5, 4], distinct per warehouse.
    let wobble = ((offset * 7 + slot as i64 * 11) % 10) - 5;
    KpiDailyRow {
        day,
        warehouse_id: warehouse_id.to_string(),
        avg_fulfillment_hours: base_hours + wobble as f64 * 0.3,
        on_time_rate: (base_rate + wobble as f64 * 0.004).clamp(0.0, 1.0),
        units: (base_units + wobble * 20) as u64,
    }
}

/// Recent orders for one warehouse, newest first.
pub fn orders_for(warehouse_id: &str) -> Vec<OrderRow> {
    let slot = WAREHOUSES
        .iter()
        .position(|w| w.warehouse_id == warehouse_id)
        .unwrap_or(0);
    let now = Utc::now();
    (0..6)
        .map(|i| {
            let hours = 18.0 + ((i * 9 + slot * 5) % 30) as f64;
            OrderRow {
                order_id: (1001 + slot * 100 + i).to_string(),
                fulfillment_hours: hours,
                on_time_flag: hours <= 36.0,
                qty: 1 + ((i * 3 + slot) % 7) as u64,
                order_ts: now - Duration::hours(6 + i as i64 * 19),
            }
        })
        .collect()
}

/// Upstream source freshness, statuses derived from the thresholds.
pub fn freshness_rows() -> Vec<SourceFreshness> {
    let now = Utc::now();
    [
        ("raw.orders", Some(2.0), Some(6.0), 0.5),
        ("raw.warehouses", None, None, 1.0),
        ("raw.inventory_movements", Some(2.0), Some(6.0), 2.5),
    ]
    .into_iter()
    .map(|(source, warn, error, age_hours)| {
        SourceFreshness::classified(
            source,
            now - Duration::minutes((age_hours * 60.0) as i64),
            warn,
            error,
            age_hours,
        )
    })
    .collect()
}

/// Latest dbt-style test run results.
pub fn model_tests() -> Vec<ModelTest> {
    let last_run = Utc::now() - Duration::minutes(30);
    vec![
        ModelTest {
            model_name: "fct_orders".to_string(),
            test_name: "not_null".to_string(),
            status: TestStatus::Pass,
            last_run,
            error_message: None,
        },
        ModelTest {
            model_name: "fct_orders".to_string(),
            test_name: "unique".to_string(),
            status: TestStatus::Pass,
            last_run,
            error_message: None,
        },
        ModelTest {
            model_name: "dim_warehouse".to_string(),
            test_name: "not_null".to_string(),
            status: TestStatus::Fail,
            last_run,
            error_message: Some("Null values found in warehouse_id column".to_string()),
        },
    ]
}
