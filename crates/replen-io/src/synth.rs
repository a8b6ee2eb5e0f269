//! 模擬資料產生
//!
//! 固定種子產生可重現的酒吧庫存資料集：供應商、產品、每日銷售、
//! 每週採購單與每日庫存快照。

use std::path::Path;

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Poisson;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::csv_store::{
    INVENTORY_FILE, PRODUCTS_FILE, PURCHASE_ORDERS_FILE, SALES_FILE, SUPPLIERS_FILE,
};
use crate::records::{
    ProductRecord, PurchaseOrderRecord, SalesRecord, SnapshotRecord, SupplierRecord,
};
use crate::{IoError, Result};

/// 產品名稱與類別
const BAR_ITEMS: [(&str, &str); 20] = [
    ("Vodka", "Spirits"),
    ("Gin", "Spirits"),
    ("White Rum", "Spirits"),
    ("Tequila Blanco", "Spirits"),
    ("Bourbon", "Spirits"),
    ("Scotch Whisky", "Spirits"),
    ("Triple Sec", "Liqueurs"),
    ("Coffee Liqueur", "Liqueurs"),
    ("Sweet Vermouth", "Liqueurs"),
    ("Lager", "Beer"),
    ("IPA", "Beer"),
    ("Stout", "Beer"),
    ("House Red", "Wine"),
    ("House White", "Wine"),
    ("Prosecco", "Wine"),
    ("Tonic Water", "Mixers"),
    ("Soda Water", "Mixers"),
    ("Ginger Beer", "Mixers"),
    ("Limes", "Garnish"),
    ("Olives", "Garnish"),
];

/// 各供應商的最小訂購量
const SUPPLIER_MIN_ORDER_QTY: [u64; 5] = [10, 20, 30, 40, 50];

/// 模擬參數
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// 隨機種子
    pub seed: u64,

    /// 第一天
    pub start_date: NaiveDate,

    /// 天數
    pub days: u32,

    /// 每產品日均銷量（Poisson λ）
    pub mean_daily_units: f64,
}

impl SynthConfig {
    /// 創建模擬參數（90 天，日均 5 件）
    pub fn new(seed: u64, start_date: NaiveDate) -> Self {
        Self {
            seed,
            start_date,
            days: 90,
            mean_daily_units: 5.0,
        }
    }

    /// 建構器模式：設置天數
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// 建構器模式：設置日均銷量
    pub fn with_mean_daily_units(mut self, mean_daily_units: f64) -> Self {
        self.mean_daily_units = mean_daily_units;
        self
    }
}

/// 模擬資料集
#[derive(Debug, Clone)]
pub struct SyntheticDataset {
    pub suppliers: Vec<SupplierRecord>,
    pub products: Vec<ProductRecord>,
    pub sales: Vec<SalesRecord>,
    pub purchase_orders: Vec<PurchaseOrderRecord>,
    pub inventory_snapshots: Vec<SnapshotRecord>,
}

fn money(value: f64) -> Decimal {
    Decimal::from_f64(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp(2)
}

impl SyntheticDataset {
    /// 產生資料集
    ///
    /// 日均銷量必須為正的有限值。
    pub fn generate(config: &SynthConfig) -> Result<Self> {
        let demand = Poisson::new(config.mean_daily_units).map_err(|err| {
            IoError::InvalidSynthConfig(format!(
                "mean_daily_units = {}: {err}",
                config.mean_daily_units
            ))
        })?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let dates: Vec<NaiveDate> = (0..config.days)
            .map(|offset| config.start_date + Duration::days(i64::from(offset)))
            .collect();

        let suppliers: Vec<SupplierRecord> = SUPPLIER_MIN_ORDER_QTY
            .iter()
            .enumerate()
            .map(|(idx, &min_order_qty)| SupplierRecord {
                supplier_id: (idx + 1).to_string(),
                name: format!("Supplier {}", idx + 1),
                lead_time_days: Some(rng.gen_range(5..15)),
                on_time_rate: Some((rng.gen_range(0.7..0.95) * 1000.0_f64).round() / 1000.0),
                min_order_qty: Some(min_order_qty),
            })
            .collect();

        let products: Vec<ProductRecord> = BAR_ITEMS
            .iter()
            .enumerate()
            .map(|(idx, &(name, category))| ProductRecord {
                product_id: (idx + 1).to_string(),
                sku: format!("SKU{:03}", idx + 1),
                product_name: name.to_string(),
                category: category.to_string(),
                unit_cost: money(rng.gen_range(5.0..30.0)),
                unit_price: money(rng.gen_range(35.0..60.0)),
                supplier_id: Some(rng.gen_range(1..=suppliers.len()).to_string()),
            })
            .collect();

        // units[product][day]
        let mut units = vec![vec![0u64; dates.len()]; products.len()];
        let mut sales = Vec::with_capacity(dates.len() * products.len());
        for (day, &dt) in dates.iter().enumerate() {
            for (idx, product) in products.iter().enumerate() {
                let sold = rng.sample(&demand) as u64;
                units[idx][day] = sold;
                sales.push(SalesRecord {
                    dt,
                    product_id: product.product_id.clone(),
                    units: sold,
                    revenue: (product.unit_price * Decimal::from(sold)).round_dp(2),
                });
            }
        }

        let mut purchase_orders = Vec::new();
        for product in &products {
            for &order_date in dates.iter().step_by(7) {
                let qty: u64 = rng.gen_range(20..50);
                let arrival = order_date + Duration::days(7);
                purchase_orders.push(PurchaseOrderRecord {
                    po_id: purchase_orders.len() as u64 + 1,
                    product_id: product.product_id.clone(),
                    supplier_id: product.supplier_id.clone().unwrap_or_default(),
                    order_date,
                    promised_date: arrival,
                    received_date: Some(arrival),
                    qty_ordered: qty,
                    qty_received: qty,
                });
            }
        }

        let mut inventory_snapshots = Vec::with_capacity(dates.len() * products.len());
        for (idx, product) in products.iter().enumerate() {
            let mut qty_on_hand: u64 = rng.gen_range(100..300);
            for (day, &dt) in dates.iter().enumerate() {
                qty_on_hand = qty_on_hand.saturating_sub(units[idx][day]);
                inventory_snapshots.push(SnapshotRecord {
                    dt,
                    product_id: product.product_id.clone(),
                    qty_on_hand,
                });
            }
        }

        tracing::debug!(
            "模擬資料：供應商 {}，產品 {}，銷售 {}，採購單 {}，快照 {}",
            suppliers.len(),
            products.len(),
            sales.len(),
            purchase_orders.len(),
            inventory_snapshots.len()
        );

        Ok(Self {
            suppliers,
            products,
            sales,
            purchase_orders,
            inventory_snapshots,
        })
    }

    /// 寫出所有資料表到目錄
    pub fn write_to_dir(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;

        write_records(&dir.join(SUPPLIERS_FILE), &self.suppliers)?;
        write_records(&dir.join(PRODUCTS_FILE), &self.products)?;
        write_records(&dir.join(SALES_FILE), &self.sales)?;
        write_records(&dir.join(PURCHASE_ORDERS_FILE), &self.purchase_orders)?;
        write_records(&dir.join(INVENTORY_FILE), &self.inventory_snapshots)?;

        tracing::info!("模擬資料已寫入 {}", dir.display());
        Ok(())
    }
}

fn write_records<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|source| IoError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
