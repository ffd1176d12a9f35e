//! Data-source layer for all three pages.
//!
//! Pages call the `fetch_*` functions re-exported here and never see the
//! transport behind them. The default `mock-api` feature serves fixture
//! data with realistic latency; building without default features swaps in
//! the `gloo-net` HTTP client. Neither the aggregation core nor the filter
//! state knows which one is active.
//!
//! Every failure surfaces as a single opaque `Err(String)`; callers treat
//! it as "load failed" and do not retry.

#[cfg(feature = "mock-api")]
mod fixtures;
#[cfg(not(feature = "mock-api"))]
mod http;
#[cfg(feature = "mock-api")]
mod mock;

#[cfg(not(feature = "mock-api"))]
pub use http::{
    fetch_freshness, fetch_kpi_daily, fetch_model_tests, fetch_orders, fetch_warehouse,
    fetch_warehouses,
};
#[cfg(feature = "mock-api")]
pub use mock::{
    fetch_freshness, fetch_kpi_daily, fetch_model_tests, fetch_orders, fetch_warehouse,
    fetch_warehouses,
};
