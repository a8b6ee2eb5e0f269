//! CSV 資料來源
//!
//! 目錄下的原始資料表：
//! - suppliers.csv: supplier_id,name,lead_time_days,on_time_rate,min_order_qty
//! - products.csv: product_id,sku,product_name,category,unit_cost,unit_price,supplier_id
//! - sales.csv: dt,product_id,units,revenue
//! - inventory_snapshots.csv: dt,product_id,qty_on_hand

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::path::{Path, PathBuf};

use replen_core::{InventorySnapshot, ProductDemandStats, ProductInfo, SupplierTerms};
use serde::de::DeserializeOwned;

use crate::records::{ProductRecord, SalesRecord, SnapshotRecord, SupplierRecord};
use crate::repository::ReplenishmentRepository;
use crate::{IoError, Result};

pub const SUPPLIERS_FILE: &str = "suppliers.csv";
pub const PRODUCTS_FILE: &str = "products.csv";
pub const SALES_FILE: &str = "sales.csv";
pub const PURCHASE_ORDERS_FILE: &str = "purchase_orders.csv";
pub const INVENTORY_FILE: &str = "inventory_snapshots.csv";

/// 讀取整個 CSV 檔
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|source| IoError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let file_name = path.display().to_string();
    let mut records = Vec::new();
    for (idx, result) in reader.deserialize().enumerate() {
        let record: T = result.map_err(|e| IoError::Parse {
            file: file_name.clone(),
            // 引號欄位可跨行，以讀取器回報的起始行為準
            line: e.position().map_or(idx as u64 + 2, |pos| pos.line()),
            message: e.to_string(),
        })?;
        records.push(record);
    }

    Ok(records)
}

fn ensure_unique<'a>(file: &str, keys: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(IoError::DuplicateKey {
                file: file.to_string(),
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

/// CSV 目錄資料來源（開啟時一次讀入）
#[derive(Debug, Clone)]
pub struct CsvRepository {
    dir: PathBuf,
    suppliers: Vec<SupplierRecord>,
    products: Vec<ProductRecord>,
    sales: Vec<SalesRecord>,
    snapshots: Vec<SnapshotRecord>,
}

impl CsvRepository {
    /// 開啟資料目錄
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();

        let suppliers: Vec<SupplierRecord> = read_records(&dir.join(SUPPLIERS_FILE))?;
        ensure_unique(SUPPLIERS_FILE, suppliers.iter().map(|s| s.supplier_id.as_str()))?;

        let products: Vec<ProductRecord> = read_records(&dir.join(PRODUCTS_FILE))?;
        ensure_unique(PRODUCTS_FILE, products.iter().map(|p| p.product_id.as_str()))?;

        let sales: Vec<SalesRecord> = read_records(&dir.join(SALES_FILE))?;
        let snapshots: Vec<SnapshotRecord> = read_records(&dir.join(INVENTORY_FILE))?;

        tracing::info!(
            "讀取 {}：供應商 {} 筆，產品 {} 筆，銷售 {} 筆，庫存快照 {} 筆",
            dir.display(),
            suppliers.len(),
            products.len(),
            sales.len(),
            snapshots.len()
        );

        Ok(Self {
            dir,
            suppliers,
            products,
            sales,
            snapshots,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ReplenishmentRepository for CsvRepository {
    fn fetch_demand_stats(&self) -> Result<Vec<ProductDemandStats>> {
        Ok(crate::stats::daily_demand_stats(&self.products, &self.sales))
    }

    fn fetch_latest_inventory(&self) -> Result<Vec<InventorySnapshot>> {
        Ok(crate::stats::latest_snapshots(&self.snapshots))
    }

    /// 產品對應其供應商；找不到供應商的產品不回傳，由計算引擎排除
    fn fetch_supplier_terms(&self) -> Result<Vec<SupplierTerms>> {
        let by_id: HashMap<&str, &SupplierRecord> = self
            .suppliers
            .iter()
            .map(|s| (s.supplier_id.as_str(), s))
            .collect();

        let terms = self
            .products
            .iter()
            .filter_map(|product| {
                let supplier_id = product.supplier_id.as_deref()?;
                let Some(supplier) = by_id.get(supplier_id) else {
                    tracing::warn!(
                        "產品 {} 的供應商 {} 不存在",
                        product.product_id,
                        supplier_id
                    );
                    return None;
                };
                Some(SupplierTerms {
                    product_id: product.product_id.clone(),
                    supplier_id: supplier.supplier_id.clone(),
                    supplier_name: supplier.name.clone(),
                    lead_time_days: supplier.lead_time_days,
                    min_order_qty: supplier.min_order_qty,
                })
            })
            .collect();

        Ok(terms)
    }

    fn fetch_catalog(&self) -> Result<Vec<ProductInfo>> {
        Ok(self
            .products
            .iter()
            .map(|p| {
                ProductInfo::new(
                    p.product_id.clone(),
                    p.sku.clone(),
                    p.product_name.clone(),
                    p.category.clone(),
                )
            })
            .collect())
    }
}
