//! 由原始資料表推導補貨輸入
//!
//! - 日需求統計：每產品每日銷量加總後，取平均與母體標準差
//! - 最新庫存：每產品日期最大的快照

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use replen_core::{InventorySnapshot, ProductDemandStats};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::records::{ProductRecord, SalesRecord, SnapshotRecord};

/// 統計值保留的小數位數
const STATS_SCALE: u32 = 4;

fn sqrt_decimal(value: Decimal) -> Option<Decimal> {
    let root = value.to_f64()?.sqrt();
    Decimal::from_f64(root)
}

/// 計算日需求統計，順序同產品目錄
///
/// 沒有銷售紀錄的產品回傳缺漏統計，由計算引擎補預設值。
pub fn daily_demand_stats(
    products: &[ProductRecord],
    sales: &[SalesRecord],
) -> Vec<ProductDemandStats> {
    let mut daily_units: HashMap<&str, BTreeMap<NaiveDate, u64>> = HashMap::new();
    for sale in sales {
        *daily_units
            .entry(sale.product_id.as_str())
            .or_default()
            .entry(sale.dt)
            .or_insert(0) += sale.units;
    }

    products
        .iter()
        .map(|product| match daily_units.get(product.product_id.as_str()) {
            Some(days) if !days.is_empty() => summarize(&product.product_id, days),
            _ => {
                tracing::debug!("產品 {} 沒有銷售紀錄", product.product_id);
                ProductDemandStats::missing(product.product_id.clone())
            }
        })
        .collect()
}

fn summarize(product_id: &str, days: &BTreeMap<NaiveDate, u64>) -> ProductDemandStats {
    let count = Decimal::from(days.len());
    let total: Decimal = days.values().map(|&units| Decimal::from(units)).sum();
    let mean = total / count;

    let variance = days
        .values()
        .map(|&units| {
            let diff = Decimal::from(units) - mean;
            diff * diff
        })
        .sum::<Decimal>()
        / count;

    ProductDemandStats {
        product_id: product_id.to_string(),
        avg_daily_units: Some(mean.round_dp(STATS_SCALE)),
        std_daily_units: sqrt_decimal(variance).map(|std| std.round_dp(STATS_SCALE)),
    }
}

/// 每產品取最新快照，順序依產品首次出現
///
/// 同一產品同一天有多筆時，以後出現者為準。
pub fn latest_snapshots(records: &[SnapshotRecord]) -> Vec<InventorySnapshot> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut latest: Vec<InventorySnapshot> = Vec::new();

    for record in records {
        let candidate = InventorySnapshot::new(
            record.product_id.clone(),
            record.dt,
            record.qty_on_hand,
        );

        match positions.get(record.product_id.as_str()) {
            Some(&idx) => {
                if candidate.supersedes(&latest[idx]) {
                    latest[idx] = candidate;
                }
            }
            None => {
                positions.insert(record.product_id.as_str(), latest.len());
                latest.push(candidate);
            }
        }
    }

    latest
}
