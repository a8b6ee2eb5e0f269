//! 補貨決策模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單一產品的補貨決策
///
/// 每次計算重新產生，建立後不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderDecision {
    pub product_id: String,
    pub supplier_id: String,
    pub supplier_name: String,

    /// 現有庫存
    pub qty_on_hand: u64,

    /// 日均需求（可能為預設值）
    pub avg_daily_units: Decimal,

    /// 日需求標準差（可能為預設值）
    pub std_daily_units: Decimal,

    /// 需求統計是否使用了預設值
    pub demand_defaulted: bool,

    /// 提前期（天）
    pub lead_time_days: u32,

    /// 最小訂購量
    pub min_order_qty: u64,

    /// 安全庫存
    pub safety_stock: u64,

    /// 再訂購點
    pub reorder_point: u64,

    /// 現有庫存是否低於再訂購點（嚴格小於）
    pub below_reorder_point: bool,

    /// 未套用最小訂購量前的訂購量
    pub raw_order_quantity: u64,

    /// 建議訂購量；僅在低於再訂購點時非零
    pub suggested_order_quantity: u64,
}

impl ReorderDecision {
    /// 是否需要下單
    pub fn needs_reorder(&self) -> bool {
        self.suggested_order_quantity > 0
    }

    /// 庫存與再訂購點的差距（正值表示缺口）
    pub fn shortfall(&self) -> i128 {
        i128::from(self.reorder_point) - i128::from(self.qty_on_hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision(qty_on_hand: u64, suggested: u64) -> ReorderDecision {
        ReorderDecision {
            product_id: "1".to_string(),
            supplier_id: "S1".to_string(),
            supplier_name: "Supplier 1".to_string(),
            qty_on_hand,
            avg_daily_units: Decimal::from(5),
            std_daily_units: Decimal::from(2),
            demand_defaulted: false,
            lead_time_days: 7,
            min_order_qty: 20,
            safety_stock: 9,
            reorder_point: 44,
            below_reorder_point: qty_on_hand < 44,
            raw_order_quantity: suggested,
            suggested_order_quantity: suggested,
        }
    }

    #[test]
    fn test_needs_reorder() {
        assert!(decision(30, 49).needs_reorder());
        assert!(!decision(50, 0).needs_reorder());
    }

    #[test]
    fn test_shortfall() {
        assert_eq!(decision(30, 49).shortfall(), 14);
        assert_eq!(decision(50, 0).shortfall(), -6);
    }

    #[test]
    fn test_serialize_json() {
        let json = serde_json::to_value(decision(30, 49)).unwrap();
        assert_eq!(json["product_id"], "1");
        assert_eq!(json["suggested_order_quantity"], 49);
        assert_eq!(json["below_reorder_point"], true);
    }
}
