use crate::dashboards::kpi_daily::DateRange;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single fulfilled order, listed on the warehouse detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub order_id: String,
    pub fulfillment_hours: f64,
    /// Whether the order met its delivery deadline.
    pub on_time_flag: bool,
    pub qty: u64,
    pub order_ts: DateTime<Utc>,
}

/// Query accepted by the orders endpoint. Unset dates fall back to the
/// server's default reporting window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersQuery {
    pub warehouse_id: String,
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

/// `{ data, meta }` envelope for the orders endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersResponse {
    pub data: Vec<OrderRow>,
    pub meta: OrdersMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersMeta {
    pub total_rows: usize,
    pub warehouse_id: String,
    pub date_range: DateRange,
    pub last_updated: DateTime<Utc>,
}
