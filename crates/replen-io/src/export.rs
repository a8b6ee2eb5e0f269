//! 補貨計畫匯出
//!
//! 欄位順序與存在與否屬於對下游（儀表板、CSV 匯出）的相容性約定。

use std::fs::File;
use std::io::Write;
use std::path::Path;

use replen_core::ReorderDecision;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{IoError, Result};

/// 輸出欄位（依序）
pub const PLAN_COLUMNS: [&str; 11] = [
    "product_id",
    "supplier_id",
    "supplier_name",
    "qty_on_hand",
    "avg_daily_units",
    "std_daily_units",
    "lead_time_days",
    "safety_stock",
    "reorder_point",
    "below_reorder_point",
    "suggested_order_qty",
];

/// 欄位順序須與 `PLAN_COLUMNS` 一致
#[derive(Serialize)]
struct PlanRow<'a> {
    product_id: &'a str,
    supplier_id: &'a str,
    supplier_name: &'a str,
    qty_on_hand: u64,
    avg_daily_units: Decimal,
    std_daily_units: Decimal,
    lead_time_days: u32,
    safety_stock: u64,
    reorder_point: u64,
    below_reorder_point: bool,
    suggested_order_qty: u64,
}

impl<'a> From<&'a ReorderDecision> for PlanRow<'a> {
    fn from(d: &'a ReorderDecision) -> Self {
        Self {
            product_id: &d.product_id,
            supplier_id: &d.supplier_id,
            supplier_name: &d.supplier_name,
            qty_on_hand: d.qty_on_hand,
            avg_daily_units: d.avg_daily_units,
            std_daily_units: d.std_daily_units,
            lead_time_days: d.lead_time_days,
            safety_stock: d.safety_stock,
            reorder_point: d.reorder_point,
            below_reorder_point: d.below_reorder_point,
            suggested_order_qty: d.suggested_order_quantity,
        }
    }
}

/// 寫出補貨計畫（含表頭，即使沒有資料列）
pub fn write_plan<W: Write>(writer: W, decisions: &[ReorderDecision]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(PLAN_COLUMNS)?;
    for decision in decisions {
        csv_writer.serialize(PlanRow::from(decision))?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// 寫出補貨計畫到檔案
pub fn write_plan_file(path: &Path, decisions: &[ReorderDecision]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path).map_err(|source| IoError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    write_plan(file, decisions)?;

    tracing::info!("補貨計畫已寫入 {}（{} 筆）", path.display(), decisions.len());
    Ok(())
}
