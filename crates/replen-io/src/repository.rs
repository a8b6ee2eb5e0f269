//! 資料來源介面

use replen_core::{InventorySnapshot, ProductDemandStats, ProductInfo, SupplierTerms};

use crate::Result;

/// 補貨輸入資料來源
///
/// 實作方負責選出每產品最新的庫存快照；計算引擎不處理時間序列。
pub trait ReplenishmentRepository {
    /// 每產品日需求統計（主表）
    fn fetch_demand_stats(&self) -> Result<Vec<ProductDemandStats>>;

    /// 每產品最新庫存快照
    fn fetch_latest_inventory(&self) -> Result<Vec<InventorySnapshot>>;

    /// 每產品供應商條件
    fn fetch_supplier_terms(&self) -> Result<Vec<SupplierTerms>>;

    /// 產品目錄
    fn fetch_catalog(&self) -> Result<Vec<ProductInfo>>;
}

/// 一次計算所需的三份輸入
#[derive(Debug, Clone, Default)]
pub struct Feeds {
    pub demand: Vec<ProductDemandStats>,
    pub inventory: Vec<InventorySnapshot>,
    pub suppliers: Vec<SupplierTerms>,
}

/// 從資料來源讀取全部輸入
pub fn load_feeds(repository: &dyn ReplenishmentRepository) -> Result<Feeds> {
    let feeds = Feeds {
        demand: repository.fetch_demand_stats()?,
        inventory: repository.fetch_latest_inventory()?,
        suppliers: repository.fetch_supplier_terms()?,
    };

    tracing::debug!(
        "讀取輸入：需求 {} 筆，庫存 {} 筆，供應商條件 {} 筆",
        feeds.demand.len(),
        feeds.inventory.len(),
        feeds.suppliers.len()
    );

    Ok(feeds)
}

/// 記憶體資料來源
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    demand: Vec<ProductDemandStats>,
    inventory: Vec<InventorySnapshot>,
    suppliers: Vec<SupplierTerms>,
    catalog: Vec<ProductInfo>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：加入需求統計
    pub fn with_demand(mut self, stats: ProductDemandStats) -> Self {
        self.demand.push(stats);
        self
    }

    /// 建構器模式：加入庫存快照
    pub fn with_inventory(mut self, snapshot: InventorySnapshot) -> Self {
        self.inventory.push(snapshot);
        self
    }

    /// 建構器模式：加入供應商條件
    pub fn with_supplier_terms(mut self, terms: SupplierTerms) -> Self {
        self.suppliers.push(terms);
        self
    }

    /// 建構器模式：加入目錄項目
    pub fn with_product_info(mut self, info: ProductInfo) -> Self {
        self.catalog.push(info);
        self
    }
}

impl ReplenishmentRepository for InMemoryRepository {
    fn fetch_demand_stats(&self) -> Result<Vec<ProductDemandStats>> {
        Ok(self.demand.clone())
    }

    fn fetch_latest_inventory(&self) -> Result<Vec<InventorySnapshot>> {
        Ok(self.inventory.clone())
    }

    fn fetch_supplier_terms(&self) -> Result<Vec<SupplierTerms>> {
        Ok(self.suppliers.clone())
    }

    fn fetch_catalog(&self) -> Result<Vec<ProductInfo>> {
        Ok(self.catalog.clone())
    }
}
