//! # Replenishment Calculation Engine
//!
//! 再訂購點補貨計算引擎

pub mod calculator;
pub mod join;
pub mod normal;
pub mod policy;
pub mod summary;

use replen_core::{ReorderDecision, RowErrorKind};
use serde::Serialize;

// Re-export 主要類型
pub use calculator::ReorderCalculator;
pub use join::PolicyInput;
pub use normal::inverse_normal_cdf;
pub use policy::ReorderPolicy;
pub use summary::PlanSummary;

/// 補貨計算結果
#[derive(Debug, Clone, Serialize)]
pub struct ReorderPlan {
    /// 成功計算的決策，順序同需求資料
    pub decisions: Vec<ReorderDecision>,

    /// 被排除的產品及原因
    pub excluded: Vec<ExcludedRow>,

    /// 使用的安全係數 z
    pub safety_factor: f64,

    /// 計算耗時（毫秒）
    #[serde(skip)]
    pub calculation_time_ms: Option<u128>,
}

impl ReorderPlan {
    /// 創建空的計算結果
    pub fn empty(safety_factor: f64) -> Self {
        Self {
            decisions: Vec::new(),
            excluded: Vec::new(),
            safety_factor,
            calculation_time_ms: None,
        }
    }

    /// 添加排除記錄
    pub fn add_excluded(&mut self, row: ExcludedRow) {
        self.excluded.push(row);
    }

    /// 各排除原因的筆數
    pub fn excluded_count(&self, kind: RowErrorKind) -> usize {
        self.excluded.iter().filter(|row| row.kind == kind).count()
    }
}

/// 被排除的產品
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedRow {
    pub product_id: String,
    pub kind: RowErrorKind,
    pub message: String,
}

impl ExcludedRow {
    pub fn new(product_id: String, kind: RowErrorKind, message: String) -> Self {
        Self {
            product_id,
            kind,
            message,
        }
    }
}
