//! HTTP transport against the real backend.

use contracts::dashboards::data_quality::{FreshnessResponse, ModelTestsResponse};
use contracts::dashboards::kpi_daily::{KpiDailyQuery, KpiDailyResponse};
use contracts::domain::order::{OrdersQuery, OrdersResponse};
use contracts::domain::warehouse::{WarehouseResponse, WarehousesResponse};
use gloo_net::http::Request;

/// Base URL for API requests, derived from the current window location
/// (the backend listens on port 3000).
fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

async fn get_json<T: serde::de::DeserializeOwned>(url: String) -> Result<T, String> {
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_kpi_daily(query: &KpiDailyQuery) -> Result<KpiDailyResponse, String> {
    let mut url = format!(
        "{}/api/kpi/daily?start={}&end={}",
        api_base(),
        query.start,
        query.end
    );
    // Omitted entirely when empty; the backend reads that as "all".
    for id in &query.warehouse_ids {
        url.push_str("&warehouse_ids=");
        url.push_str(&urlencoding::encode(id));
    }
    get_json(url).await
}

pub async fn fetch_warehouses() -> Result<WarehousesResponse, String> {
    get_json(format!("{}/api/warehouses", api_base())).await
}

pub async fn fetch_warehouse(id: &str) -> Result<WarehouseResponse, String> {
    get_json(format!(
        "{}/api/warehouses/{}",
        api_base(),
        urlencoding::encode(id)
    ))
    .await
}

pub async fn fetch_orders(query: &OrdersQuery) -> Result<OrdersResponse, String> {
    let mut url = format!(
        "{}/api/orders?warehouse_id={}",
        api_base(),
        urlencoding::encode(&query.warehouse_id)
    );
    if let Some(start) = query.start {
        url.push_str(&format!("&start={}", start));
    }
    if let Some(end) = query.end {
        url.push_str(&format!("&end={}", end));
    }
    get_json(url).await
}

pub async fn fetch_freshness() -> Result<FreshnessResponse, String> {
    get_json(format!("{}/api/quality/freshness", api_base())).await
}

pub async fn fetch_model_tests() -> Result<ModelTestsResponse, String> {
    get_json(format!("{}/api/quality/tests", api_base())).await
}
