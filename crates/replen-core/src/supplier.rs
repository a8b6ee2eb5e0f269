//! 供應商條件模型

use serde::{Deserialize, Serialize};

/// 產品對應的供應商條件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierTerms {
    /// 產品ID
    pub product_id: String,

    /// 供應商ID
    pub supplier_id: String,

    /// 供應商名稱
    pub supplier_name: String,

    /// 提前期（天），必須大於 0
    pub lead_time_days: Option<u32>,

    /// 最小訂購量；缺漏時視為 0
    pub min_order_qty: Option<u64>,
}

impl SupplierTerms {
    /// 創建新的供應商條件
    pub fn new(
        product_id: String,
        supplier_id: String,
        supplier_name: String,
        lead_time_days: u32,
        min_order_qty: u64,
    ) -> Self {
        Self {
            product_id,
            supplier_id,
            supplier_name,
            lead_time_days: Some(lead_time_days),
            min_order_qty: Some(min_order_qty),
        }
    }

    /// 建構器模式：清除提前期
    pub fn without_lead_time(mut self) -> Self {
        self.lead_time_days = None;
        self
    }

    /// 建構器模式：清除最小訂購量
    pub fn without_min_order_qty(mut self) -> Self {
        self.min_order_qty = None;
        self
    }

    /// 可用的提前期（缺漏或為 0 時回傳 None）
    pub fn usable_lead_time(&self) -> Option<u32> {
        self.lead_time_days.filter(|&days| days > 0)
    }

    /// 有效的最小訂購量
    pub fn effective_min_order_qty(&self) -> u64 {
        self.min_order_qty.unwrap_or(0)
    }
}
