//! 再訂購點策略公式
//!
//! - 安全庫存 = round(z × σ × √L)
//! - 再訂購點 = round(μ × L + 安全庫存)
//! - 原始訂購量 = max(0, round(再訂購點 + μ × R − 現有庫存))
//! - 建議訂購量 = 低於再訂購點時 max(原始訂購量, 最小訂購量)，否則 0
//!
//! 取整一律採四捨五入、中點遠離零（`MidpointAwayFromZero`）。

use replen_core::{ReorderDecision, ReplenError, Result};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::join::PolicyInput;

/// 取整至整數單位
pub fn round_units(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn to_units(value: Decimal, field: &str) -> Result<u64> {
    value
        .to_u64()
        .ok_or_else(|| ReplenError::NumericOverflow(format!("{field} 超出範圍: {value}")))
}

fn overflow(field: &str) -> ReplenError {
    ReplenError::NumericOverflow(format!("{field} 計算溢位"))
}

/// 再訂購點策略（單次計算內唯讀）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReorderPolicy {
    /// 安全係數 z
    safety_factor: f64,

    /// 檢視週期（天）
    review_period_days: u32,
}

impl ReorderPolicy {
    /// 由服務水準建立策略
    pub fn new(service_level: f64, review_period_days: u32) -> Result<Self> {
        if review_period_days < 1 {
            return Err(ReplenError::InvalidReviewPeriod(review_period_days));
        }

        let safety_factor = crate::normal::inverse_normal_cdf(service_level)?;
        Ok(Self {
            safety_factor,
            review_period_days,
        })
    }

    pub fn safety_factor(&self) -> f64 {
        self.safety_factor
    }

    pub fn review_period_days(&self) -> u32 {
        self.review_period_days
    }

    /// 安全庫存
    ///
    /// 服務水準低於 50% 時 z 為負，結果下限為 0。
    pub fn safety_stock(&self, std_daily_units: Decimal, lead_time_days: u32) -> Result<Decimal> {
        if lead_time_days == 0 {
            return Err(ReplenError::Calculation("提前期必須大於 0".to_string()));
        }

        let sigma = std_daily_units
            .to_f64()
            .ok_or_else(|| ReplenError::NumericOverflow(format!("標準差無法轉換: {std_daily_units}")))?;
        let buffer = self.safety_factor * sigma * f64::from(lead_time_days).sqrt();

        let buffer = Decimal::from_f64(buffer)
            .ok_or_else(|| ReplenError::NumericOverflow(format!("安全庫存無法表示: {buffer}")))?;

        Ok(round_units(buffer).max(Decimal::ZERO))
    }

    /// 再訂購點：提前期內預期消耗加安全庫存
    pub fn reorder_point(
        &self,
        avg_daily_units: Decimal,
        lead_time_days: u32,
        safety_stock: Decimal,
    ) -> Result<Decimal> {
        let value = avg_daily_units
            .checked_mul(Decimal::from(lead_time_days))
            .and_then(|demand| demand.checked_add(safety_stock))
            .ok_or_else(|| overflow("reorder_point"))?;
        Ok(round_units(value))
    }

    /// 原始訂購量：補到再訂購點並涵蓋下一個檢視週期，不為負
    pub fn raw_order_quantity(
        &self,
        reorder_point: Decimal,
        avg_daily_units: Decimal,
        qty_on_hand: u64,
    ) -> Result<Decimal> {
        let value = avg_daily_units
            .checked_mul(Decimal::from(self.review_period_days))
            .and_then(|review_demand| reorder_point.checked_add(review_demand))
            .and_then(|target| target.checked_sub(Decimal::from(qty_on_hand)))
            .ok_or_else(|| overflow("raw_order_quantity"))?;
        Ok(round_units(value).max(Decimal::ZERO))
    }

    /// 建議訂購量
    pub fn suggested_order_quantity(
        below_reorder_point: bool,
        raw_order_quantity: u64,
        min_order_qty: u64,
    ) -> u64 {
        if below_reorder_point {
            raw_order_quantity.max(min_order_qty)
        } else {
            0
        }
    }

    /// 單一產品的完整決策
    pub fn decide(&self, input: &PolicyInput) -> Result<ReorderDecision> {
        let safety_stock = self.safety_stock(input.std_daily_units, input.lead_time_days)?;
        let reorder_point =
            self.reorder_point(input.avg_daily_units, input.lead_time_days, safety_stock)?;
        let raw_order_quantity =
            self.raw_order_quantity(reorder_point, input.avg_daily_units, input.qty_on_hand)?;

        let safety_stock = to_units(safety_stock, "safety_stock")?;
        let reorder_point = to_units(reorder_point, "reorder_point")?;
        let raw_order_quantity = to_units(raw_order_quantity, "raw_order_quantity")?;

        // 相等視為足夠，不觸發補貨
        let below_reorder_point = input.qty_on_hand < reorder_point;
        let suggested_order_quantity = Self::suggested_order_quantity(
            below_reorder_point,
            raw_order_quantity,
            input.min_order_qty,
        );

        Ok(ReorderDecision {
            product_id: input.product_id.clone(),
            supplier_id: input.supplier_id.clone(),
            supplier_name: input.supplier_name.clone(),
            qty_on_hand: input.qty_on_hand,
            avg_daily_units: input.avg_daily_units,
            std_daily_units: input.std_daily_units,
            demand_defaulted: input.demand_defaulted,
            lead_time_days: input.lead_time_days,
            min_order_qty: input.min_order_qty,
            safety_stock,
            reorder_point,
            below_reorder_point,
            raw_order_quantity,
            suggested_order_quantity,
        })
    }
}
