//! # Replenishment Core
//!
//! 補貨決策的核心資料模型與錯誤類型

pub mod catalog;
pub mod config;
pub mod decision;
pub mod demand;
pub mod inventory;
pub mod supplier;

use serde::Serialize;
use std::fmt;

// Re-export 主要類型
pub use catalog::ProductInfo;
pub use config::PolicyConfig;
pub use decision::ReorderDecision;
pub use demand::ProductDemandStats;
pub use inventory::InventorySnapshot;
pub use supplier::SupplierTerms;

/// 輸入資料來源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Feed {
    /// 需求統計
    Demand,
    /// 庫存快照
    Inventory,
    /// 供應商條件
    Supplier,
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Feed::Demand => "demand",
            Feed::Inventory => "inventory",
            Feed::Supplier => "supplier",
        };
        f.write_str(name)
    }
}

/// 補貨計算錯誤類型（整批中止）
#[derive(Debug, thiserror::Error)]
pub enum ReplenError {
    #[error("無效的服務水準: {0}（必須介於 0 與 1 之間，不含端點）")]
    InvalidServiceLevel(f64),

    #[error("無效的檢視週期: {0} 天（至少 1 天）")]
    InvalidReviewPeriod(u32),

    #[error("無效的預設需求參數: {0}")]
    InvalidDefaultDemand(String),

    #[error("資料來源 {feed} 中產品重複: {product_id}")]
    DuplicateProduct { feed: Feed, product_id: String },

    #[error("計算錯誤: {0}")]
    Calculation(String),

    #[error("數值溢位: {0}")]
    NumericOverflow(String),
}

pub type Result<T> = std::result::Result<T, ReplenError>;

/// 單列排除原因（不影響整批）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RowErrorKind {
    /// 缺少供應商條件（提前期缺漏或為 0）
    IncompleteSupplierData,
    /// 缺少最新庫存快照
    MissingInventorySnapshot,
    /// 需求統計為負數或非有限值
    InvalidDemandStats,
    /// 計算結果超出可表示範圍
    NumericOverflow,
}

impl fmt::Display for RowErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RowErrorKind::IncompleteSupplierData => "IncompleteSupplierData",
            RowErrorKind::MissingInventorySnapshot => "MissingInventorySnapshot",
            RowErrorKind::InvalidDemandStats => "InvalidDemandStats",
            RowErrorKind::NumericOverflow => "NumericOverflow",
        };
        f.write_str(name)
    }
}
