//! Fixture-backed transport used during development.
//!
//! Mirrors the latency and `{ data, meta }` envelopes of the real
//! endpoints. The KPI fixtures honor the date range and warehouse subset
//! from the query, so the "empty subset means all warehouses" contract is
//! exercised end to end.

use super::fixtures;
use chrono::{Duration, Utc};
use contracts::dashboards::data_quality::{
    FreshnessMeta, FreshnessResponse, ModelTestsMeta, ModelTestsResponse, TestStatus,
};
use contracts::dashboards::kpi_daily::{DateRange, KpiDailyMeta, KpiDailyQuery, KpiDailyResponse};
use contracts::domain::order::{OrdersMeta, OrdersQuery, OrdersResponse};
use contracts::domain::warehouse::{
    WarehouseMeta, WarehouseResponse, WarehousesMeta, WarehousesResponse,
};
use contracts::shared::filters::DEFAULT_WINDOW_DAYS;
use gloo_timers::future::TimeoutFuture;

pub async fn fetch_kpi_daily(query: &KpiDailyQuery) -> Result<KpiDailyResponse, String> {
    TimeoutFuture::new(500).await;

    let data: Vec<_> = fixtures::KPI_DAILY
        .iter()
        .filter(|row| row.day >= query.start && row.day <= query.end)
        .filter(|row| {
            query.warehouse_ids.is_empty() || query.warehouse_ids.contains(&row.warehouse_id)
        })
        .cloned()
        .collect();

    let warehouses_included = if query.warehouse_ids.is_empty() {
        fixtures::WAREHOUSES
            .iter()
            .map(|w| w.warehouse_id.clone())
            .collect()
    } else {
        query.warehouse_ids.clone()
    };

    Ok(KpiDailyResponse {
        meta: KpiDailyMeta {
            total_rows: data.len(),
            date_range: DateRange {
                start: query.start,
                end: query.end,
            },
            warehouses_included,
            last_updated: Utc::now(),
        },
        data,
    })
}

pub async fn fetch_warehouses() -> Result<WarehousesResponse, String> {
    TimeoutFuture::new(300).await;
    let data = fixtures::WAREHOUSES.clone();
    Ok(WarehousesResponse {
        meta: WarehousesMeta {
            total_warehouses: data.len(),
            last_updated: Utc::now(),
        },
        data,
    })
}

pub async fn fetch_warehouse(id: &str) -> Result<WarehouseResponse, String> {
    TimeoutFuture::new(300).await;
    Ok(WarehouseResponse {
        data: fixtures::WAREHOUSES
            .iter()
            .find(|w| w.warehouse_id == id)
            .cloned(),
        meta: WarehouseMeta {
            last_updated: Utc::now(),
        },
    })
}

pub async fn fetch_orders(query: &OrdersQuery) -> Result<OrdersResponse, String> {
    TimeoutFuture::new(400).await;

    let today = Utc::now().date_naive();
    let data = fixtures::orders_for(&query.warehouse_id);
    Ok(OrdersResponse {
        meta: OrdersMeta {
            total_rows: data.len(),
            warehouse_id: query.warehouse_id.clone(),
            date_range: DateRange {
                start: query
                    .start
                    .unwrap_or(today - Duration::days(DEFAULT_WINDOW_DAYS)),
                end: query.end.unwrap_or(today),
            },
            last_updated: Utc::now(),
        },
        data,
    })
}

pub async fn fetch_freshness() -> Result<FreshnessResponse, String> {
    TimeoutFuture::new(400).await;
    Ok(FreshnessResponse {
        data: fixtures::freshness_rows(),
        meta: FreshnessMeta {
            last_check: Utc::now(),
        },
    })
}

pub async fn fetch_model_tests() -> Result<ModelTestsResponse, String> {
    TimeoutFuture::new(400).await;

    let data = fixtures::model_tests();
    let passed = data.iter().filter(|t| t.status == TestStatus::Pass).count();
    let last_run = data
        .iter()
        .map(|t| t.last_run)
        .max()
        .unwrap_or_else(Utc::now);
    Ok(ModelTestsResponse {
        meta: ModelTestsMeta {
            total_tests: data.len(),
            passed_tests: passed,
            failed_tests: data.len() - passed,
            last_run,
        },
        data,
    })
}
