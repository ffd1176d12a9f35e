use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference entity for a fulfillment warehouse.
///
/// The directory is fetched once per session and treated as immutable
/// afterwards; pages key into it by `warehouse_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub warehouse_id: String,
    pub city: String,
    pub capacity_units: u64,
}

/// `{ data, meta }` envelope for the warehouse directory endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehousesResponse {
    pub data: Vec<Warehouse>,
    pub meta: WarehousesMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehousesMeta {
    pub total_warehouses: usize,
    pub last_updated: DateTime<Utc>,
}

/// Envelope for a single-warehouse lookup. `data: None` means the id is
/// unknown (the detail page renders its not-found state and stops).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseResponse {
    pub data: Option<Warehouse>,
    pub meta: WarehouseMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseMeta {
    pub last_updated: DateTime<Utc>,
}
