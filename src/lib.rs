//! # Replen
//!
//! 多產品、多供應商的再訂購點補貨建議：
//! 由需求統計、現有庫存與供應商提前期推算安全庫存、再訂購點與建議訂購量。

pub use replen_calc::{
    inverse_normal_cdf, ExcludedRow, PlanSummary, ReorderCalculator, ReorderPlan, ReorderPolicy,
};
pub use replen_core::{
    InventorySnapshot, PolicyConfig, ProductDemandStats, ProductInfo, ReorderDecision,
    ReplenError, RowErrorKind, SupplierTerms,
};
pub use replen_io::{
    load_feeds, write_plan, write_plan_file, CsvRepository, Feeds, InMemoryRepository, IoError,
    ReplenishmentRepository, PLAN_COLUMNS,
};
