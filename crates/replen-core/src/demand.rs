//! 需求統計模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 產品日需求統計（上游預先計算，唯讀）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDemandStats {
    /// 產品ID
    pub product_id: String,

    /// 日均需求（單位/天）；無銷售歷史時為 None
    pub avg_daily_units: Option<Decimal>,

    /// 日需求標準差（單位/天）；無銷售歷史時為 None
    pub std_daily_units: Option<Decimal>,
}

/// 補齊預設值後的需求統計
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDemand {
    pub avg_daily_units: Decimal,
    pub std_daily_units: Decimal,
    /// 是否有任一欄位使用了預設值
    pub defaulted: bool,
}

impl ProductDemandStats {
    /// 創建完整的需求統計
    pub fn new(product_id: String, avg_daily_units: Decimal, std_daily_units: Decimal) -> Self {
        Self {
            product_id,
            avg_daily_units: Some(avg_daily_units),
            std_daily_units: Some(std_daily_units),
        }
    }

    /// 創建無銷售歷史的需求統計
    pub fn missing(product_id: String) -> Self {
        Self {
            product_id,
            avg_daily_units: None,
            std_daily_units: None,
        }
    }

    /// 是否兩個欄位皆有值
    pub fn is_complete(&self) -> bool {
        self.avg_daily_units.is_some() && self.std_daily_units.is_some()
    }

    /// 缺漏欄位各自以預設值補齊
    pub fn resolve(&self, default_avg: Decimal, default_std: Decimal) -> ResolvedDemand {
        ResolvedDemand {
            avg_daily_units: self.avg_daily_units.unwrap_or(default_avg),
            std_daily_units: self.std_daily_units.unwrap_or(default_std),
            defaulted: !self.is_complete(),
        }
    }
}

impl ResolvedDemand {
    /// 需求統計不可為負
    pub fn is_valid(&self) -> bool {
        self.avg_daily_units >= Decimal::ZERO && self.std_daily_units >= Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_stats_are_kept() {
        let stats = ProductDemandStats::new("1".to_string(), Decimal::from(5), Decimal::from(2));
        let resolved = stats.resolve(Decimal::new(5, 1), Decimal::new(7, 1));

        assert_eq!(resolved.avg_daily_units, Decimal::from(5));
        assert_eq!(resolved.std_daily_units, Decimal::from(2));
        assert!(!resolved.defaulted);
        assert!(resolved.is_valid());
    }

    #[test]
    fn test_missing_stats_are_defaulted() {
        let stats = ProductDemandStats::missing("2".to_string());
        let resolved = stats.resolve(Decimal::new(5, 1), Decimal::new(7, 1));

        assert_eq!(resolved.avg_daily_units, Decimal::new(5, 1));
        assert_eq!(resolved.std_daily_units, Decimal::new(7, 1));
        assert!(resolved.defaulted);
    }

    #[test]
    fn test_fields_default_independently() {
        let stats = ProductDemandStats {
            product_id: "3".to_string(),
            avg_daily_units: Some(Decimal::from(4)),
            std_daily_units: None,
        };
        let resolved = stats.resolve(Decimal::new(5, 1), Decimal::new(7, 1));

        assert_eq!(resolved.avg_daily_units, Decimal::from(4));
        assert_eq!(resolved.std_daily_units, Decimal::new(7, 1));
        assert!(resolved.defaulted);
    }

    #[test]
    fn test_negative_stats_are_invalid() {
        let stats = ProductDemandStats::new("4".to_string(), Decimal::from(-1), Decimal::ONE);
        let resolved = stats.resolve(Decimal::ZERO, Decimal::ZERO);

        assert!(!resolved.is_valid());
    }
}
