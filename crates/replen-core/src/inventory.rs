//! 庫存快照模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 產品在某一日的現有庫存
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    /// 產品ID
    pub product_id: String,

    /// 快照日期
    pub snapshot_date: NaiveDate,

    /// 現有庫存
    pub qty_on_hand: u64,
}

impl InventorySnapshot {
    /// 創建新的庫存快照
    pub fn new(product_id: String, snapshot_date: NaiveDate, qty_on_hand: u64) -> Self {
        Self {
            product_id,
            snapshot_date,
            qty_on_hand,
        }
    }

    /// 同日期時視為較新（後讀入者優先）
    pub fn supersedes(&self, other: &InventorySnapshot) -> bool {
        self.snapshot_date >= other.snapshot_date
    }
}
