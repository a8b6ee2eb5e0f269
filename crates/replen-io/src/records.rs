//! 原始資料表的列格式

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// suppliers.csv
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRecord {
    pub supplier_id: String,
    pub name: String,
    pub lead_time_days: Option<u32>,
    pub on_time_rate: Option<f64>,
    pub min_order_qty: Option<u64>,
}

/// products.csv
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_id: String,
    pub sku: String,
    pub product_name: String,
    pub category: String,
    pub unit_cost: Decimal,
    pub unit_price: Decimal,
    pub supplier_id: Option<String>,
}

/// sales.csv
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub dt: NaiveDate,
    pub product_id: String,
    pub units: u64,
    pub revenue: Decimal,
}

/// purchase_orders.csv
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderRecord {
    pub po_id: u64,
    pub product_id: String,
    pub supplier_id: String,
    pub order_date: NaiveDate,
    pub promised_date: NaiveDate,
    pub received_date: Option<NaiveDate>,
    pub qty_ordered: u64,
    pub qty_received: u64,
}

/// inventory_snapshots.csv
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub dt: NaiveDate,
    pub product_id: String,
    pub qty_on_hand: u64,
}
