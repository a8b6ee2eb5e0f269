//! 需求、庫存、供應商三份資料的合併
//!
//! 以需求資料為主表做左連接；每份資料的產品ID必須唯一。

use std::collections::{HashMap, HashSet};

use replen_core::{
    Feed, InventorySnapshot, PolicyConfig, ProductDemandStats, ReplenError, Result, RowErrorKind,
    SupplierTerms,
};
use rust_decimal::Decimal;

use crate::ExcludedRow;

/// 合併後、可直接計算的單列輸入
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyInput {
    pub product_id: String,
    pub supplier_id: String,
    pub supplier_name: String,
    pub qty_on_hand: u64,
    pub avg_daily_units: Decimal,
    pub std_daily_units: Decimal,
    pub demand_defaulted: bool,
    pub lead_time_days: u32,
    pub min_order_qty: u64,
}

/// 合併結果：可計算的列或排除原因，順序同需求資料
pub type JoinedRow = std::result::Result<PolicyInput, ExcludedRow>;

fn index_unique<'a, T>(
    rows: &'a [T],
    feed: Feed,
    key: impl Fn(&T) -> &str,
) -> Result<HashMap<&'a str, &'a T>> {
    let mut index = HashMap::with_capacity(rows.len());
    for row in rows {
        let product_id = key(row);
        if index.insert(product_id, row).is_some() {
            return Err(ReplenError::DuplicateProduct {
                feed,
                product_id: product_id.to_string(),
            });
        }
    }
    Ok(index)
}

fn ensure_unique_demand(demand: &[ProductDemandStats]) -> Result<()> {
    let mut seen = HashSet::with_capacity(demand.len());
    for stats in demand {
        if !seen.insert(stats.product_id.as_str()) {
            return Err(ReplenError::DuplicateProduct {
                feed: Feed::Demand,
                product_id: stats.product_id.clone(),
            });
        }
    }
    Ok(())
}

/// 合併三份資料
pub fn join_feeds(
    demand: &[ProductDemandStats],
    inventory: &[InventorySnapshot],
    suppliers: &[SupplierTerms],
    config: &PolicyConfig,
) -> Result<Vec<JoinedRow>> {
    ensure_unique_demand(demand)?;
    let inventory_map = index_unique(inventory, Feed::Inventory, |s| s.product_id.as_str())?;
    let supplier_map = index_unique(suppliers, Feed::Supplier, |t| t.product_id.as_str())?;

    let rows = demand
        .iter()
        .map(|stats| {
            join_row(
                stats,
                inventory_map.get(stats.product_id.as_str()).copied(),
                supplier_map.get(stats.product_id.as_str()).copied(),
                config,
            )
        })
        .collect();

    Ok(rows)
}

fn join_row(
    stats: &ProductDemandStats,
    snapshot: Option<&InventorySnapshot>,
    terms: Option<&SupplierTerms>,
    config: &PolicyConfig,
) -> JoinedRow {
    let product_id = &stats.product_id;

    let terms = terms.ok_or_else(|| {
        ExcludedRow::new(
            product_id.clone(),
            RowErrorKind::IncompleteSupplierData,
            "找不到供應商條件".to_string(),
        )
    })?;

    let lead_time_days = terms.usable_lead_time().ok_or_else(|| {
        ExcludedRow::new(
            product_id.clone(),
            RowErrorKind::IncompleteSupplierData,
            format!("供應商 {} 的提前期缺漏或為 0", terms.supplier_id),
        )
    })?;

    let snapshot = snapshot.ok_or_else(|| {
        ExcludedRow::new(
            product_id.clone(),
            RowErrorKind::MissingInventorySnapshot,
            "找不到最新庫存快照".to_string(),
        )
    })?;

    let demand = stats.resolve(config.default_avg_daily_units, config.default_std_daily_units);
    if !demand.is_valid() {
        return Err(ExcludedRow::new(
            product_id.clone(),
            RowErrorKind::InvalidDemandStats,
            format!(
                "需求統計不可為負: avg={}, std={}",
                demand.avg_daily_units, demand.std_daily_units
            ),
        ));
    }

    if demand.defaulted {
        tracing::warn!(
            "產品 {} 缺少需求統計，使用預設值 avg={} std={}",
            product_id,
            demand.avg_daily_units,
            demand.std_daily_units
        );
    }

    Ok(PolicyInput {
        product_id: product_id.clone(),
        supplier_id: terms.supplier_id.clone(),
        supplier_name: terms.supplier_name.clone(),
        qty_on_hand: snapshot.qty_on_hand,
        avg_daily_units: demand.avg_daily_units,
        std_daily_units: demand.std_daily_units,
        demand_defaulted: demand.defaulted,
        lead_time_days,
        min_order_qty: terms.effective_min_order_qty(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn snapshot(product_id: &str, qty: u64) -> InventorySnapshot {
        InventorySnapshot::new(
            product_id.to_string(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            qty,
        )
    }

    fn terms(product_id: &str, lead_time: u32, min_order_qty: u64) -> SupplierTerms {
        SupplierTerms::new(
            product_id.to_string(),
            "S1".to_string(),
            "Supplier 1".to_string(),
            lead_time,
            min_order_qty,
        )
    }

    #[test]
    fn test_join_complete_row() {
        let demand = vec![ProductDemandStats::new(
            "1".to_string(),
            Decimal::from(5),
            Decimal::from(2),
        )];
        let rows = join_feeds(
            &demand,
            &[snapshot("1", 30)],
            &[terms("1", 7, 20)],
            &PolicyConfig::default(),
        )
        .unwrap();

        assert_eq!(rows.len(), 1);
        let row = rows[0].as_ref().unwrap();
        assert_eq!(row.qty_on_hand, 30);
        assert_eq!(row.lead_time_days, 7);
        assert_eq!(row.min_order_qty, 20);
        assert_eq!(row.supplier_name, "Supplier 1");
        assert!(!row.demand_defaulted);
    }

    #[test]
    fn test_missing_demand_stats_defaulted() {
        let demand = vec![ProductDemandStats::missing("1".to_string())];
        let rows = join_feeds(
            &demand,
            &[snapshot("1", 30)],
            &[terms("1", 7, 20)],
            &PolicyConfig::default(),
        )
        .unwrap();

        let row = rows[0].as_ref().unwrap();
        assert_eq!(row.avg_daily_units, Decimal::new(5, 1));
        assert_eq!(row.std_daily_units, Decimal::new(7, 1));
        assert!(row.demand_defaulted);
    }

    #[test]
    fn test_incomplete_supplier_data() {
        let demand = vec![
            ProductDemandStats::new("1".to_string(), Decimal::from(5), Decimal::from(2)),
            ProductDemandStats::new("2".to_string(), Decimal::from(5), Decimal::from(2)),
            ProductDemandStats::new("3".to_string(), Decimal::from(5), Decimal::from(2)),
        ];
        let inventory = vec![snapshot("1", 10), snapshot("2", 10), snapshot("3", 10)];
        let suppliers = vec![terms("2", 0, 20), terms("3", 7, 20).without_lead_time()];

        let rows = join_feeds(&demand, &inventory, &suppliers, &PolicyConfig::default()).unwrap();

        assert_eq!(rows.len(), 3);
        for row in &rows {
            let excluded = row.as_ref().unwrap_err();
            assert_eq!(excluded.kind, RowErrorKind::IncompleteSupplierData);
        }
        assert_eq!(rows[0].as_ref().unwrap_err().product_id, "1");
    }

    #[test]
    fn test_missing_min_order_qty_is_zero() {
        let demand = vec![ProductDemandStats::new(
            "1".to_string(),
            Decimal::from(5),
            Decimal::from(2),
        )];
        let rows = join_feeds(
            &demand,
            &[snapshot("1", 30)],
            &[terms("1", 7, 20).without_min_order_qty()],
            &PolicyConfig::default(),
        )
        .unwrap();

        assert_eq!(rows[0].as_ref().unwrap().min_order_qty, 0);
    }

    #[test]
    fn test_missing_inventory_snapshot() {
        let demand = vec![ProductDemandStats::new(
            "1".to_string(),
            Decimal::from(5),
            Decimal::from(2),
        )];
        let rows = join_feeds(&demand, &[], &[terms("1", 7, 20)], &PolicyConfig::default()).unwrap();

        assert_eq!(
            rows[0].as_ref().unwrap_err().kind,
            RowErrorKind::MissingInventorySnapshot
        );
    }

    #[test]
    fn test_negative_demand_excluded() {
        let demand = vec![ProductDemandStats::new(
            "1".to_string(),
            Decimal::from(-5),
            Decimal::from(2),
        )];
        let rows = join_feeds(
            &demand,
            &[snapshot("1", 30)],
            &[terms("1", 7, 20)],
            &PolicyConfig::default(),
        )
        .unwrap();

        assert_eq!(
            rows[0].as_ref().unwrap_err().kind,
            RowErrorKind::InvalidDemandStats
        );
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let demand = vec![ProductDemandStats::missing("1".to_string())];

        let result = join_feeds(
            &demand,
            &[snapshot("1", 30), snapshot("1", 40)],
            &[terms("1", 7, 20)],
            &PolicyConfig::default(),
        );
        assert!(matches!(
            result,
            Err(ReplenError::DuplicateProduct {
                feed: Feed::Inventory,
                ..
            })
        ));

        let demand = vec![
            ProductDemandStats::missing("1".to_string()),
            ProductDemandStats::missing("1".to_string()),
        ];
        let result = join_feeds(&demand, &[], &[], &PolicyConfig::default());
        assert!(matches!(
            result,
            Err(ReplenError::DuplicateProduct {
                feed: Feed::Demand,
                ..
            })
        ));
    }
}
