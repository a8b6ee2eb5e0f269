//! 產品目錄

use serde::{Deserialize, Serialize};

/// 產品基本資料（報表篩選用，不參與補貨計算）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub product_id: String,
    pub sku: String,
    pub product_name: String,
    pub category: String,
}

impl ProductInfo {
    pub fn new(product_id: String, sku: String, product_name: String, category: String) -> Self {
        Self {
            product_id,
            sku,
            product_name,
            category,
        }
    }

    /// 類別比對（不分大小寫）
    pub fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}
