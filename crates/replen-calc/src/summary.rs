//! 補貨計畫摘要與篩選

use std::collections::{BTreeSet, HashMap};

use replen_core::{ProductInfo, ReorderDecision};
use serde::Serialize;

/// 計畫摘要（儀表板 KPI）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    /// 產品數
    pub products: usize,
    /// 供應商數（依名稱去重）
    pub suppliers: usize,
    /// 低於再訂購點的產品數
    pub need_reorder: usize,
    /// 建議訂購總量
    pub total_suggested_units: u64,
}

impl PlanSummary {
    pub fn from_decisions(decisions: &[ReorderDecision]) -> Self {
        let suppliers: BTreeSet<&str> = decisions
            .iter()
            .map(|d| d.supplier_name.as_str())
            .collect();

        Self {
            products: decisions.len(),
            suppliers: suppliers.len(),
            need_reorder: decisions.iter().filter(|d| d.below_reorder_point).count(),
            total_suggested_units: decisions.iter().map(|d| d.suggested_order_quantity).sum(),
        }
    }
}

/// 低於再訂購點的決策
pub fn below_reorder_point(decisions: &[ReorderDecision]) -> Vec<&ReorderDecision> {
    decisions.iter().filter(|d| d.below_reorder_point).collect()
}

/// 依產品類別篩選；類別清單為空時不篩選
///
/// 目錄中找不到的產品視為不屬於任何類別。
pub fn filter_by_category<'a>(
    decisions: &'a [ReorderDecision],
    catalog: &HashMap<String, ProductInfo>,
    categories: &[String],
) -> Vec<&'a ReorderDecision> {
    if categories.is_empty() {
        return decisions.iter().collect();
    }

    decisions
        .iter()
        .filter(|d| {
            catalog
                .get(&d.product_id)
                .map(|info| categories.iter().any(|c| info.in_category(c)))
                .unwrap_or(false)
        })
        .collect()
}
