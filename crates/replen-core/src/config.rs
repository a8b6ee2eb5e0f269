//! 補貨策略配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ReplenError, Result};

/// 預設服務水準（95%）
pub const DEFAULT_SERVICE_LEVEL: f64 = 0.95;

/// 預設檢視週期（天）
pub const DEFAULT_REVIEW_PERIOD_DAYS: u32 = 7;

/// 無銷售歷史時的預設日均需求
///
/// 冷啟動用的經驗值，並非統計推導，需依實際業務調整。
pub fn default_avg_daily_units() -> Decimal {
    Decimal::new(5, 1)
}

/// 無銷售歷史時的預設日需求標準差
///
/// 冷啟動用的經驗值，並非統計推導，需依實際業務調整。
pub fn default_std_daily_units() -> Decimal {
    Decimal::new(7, 1)
}

fn default_service_level() -> f64 {
    DEFAULT_SERVICE_LEVEL
}

fn default_review_period_days() -> u32 {
    DEFAULT_REVIEW_PERIOD_DAYS
}

fn default_parallel() -> bool {
    true
}

/// 補貨策略參數
///
/// 每次計算時傳入，計算過程中唯讀。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// 目標服務水準（不缺貨機率），必須在 (0, 1) 之間
    #[serde(default = "default_service_level")]
    pub service_level: f64,

    /// 檢視週期（天），至少 1
    #[serde(default = "default_review_period_days")]
    pub review_period_days: u32,

    /// 缺少需求統計時使用的日均需求
    #[serde(default = "default_avg_daily_units")]
    pub default_avg_daily_units: Decimal,

    /// 缺少需求統計時使用的日需求標準差
    #[serde(default = "default_std_daily_units")]
    pub default_std_daily_units: Decimal,

    /// 是否並行計算（結果與循序計算相同）
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            service_level: DEFAULT_SERVICE_LEVEL,
            review_period_days: DEFAULT_REVIEW_PERIOD_DAYS,
            default_avg_daily_units: default_avg_daily_units(),
            default_std_daily_units: default_std_daily_units(),
            parallel: true,
        }
    }
}

impl PolicyConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置服務水準
    pub fn with_service_level(mut self, service_level: f64) -> Self {
        self.service_level = service_level;
        self
    }

    /// 建構器模式：設置檢視週期
    pub fn with_review_period_days(mut self, days: u32) -> Self {
        self.review_period_days = days;
        self
    }

    /// 建構器模式：設置冷啟動預設需求
    pub fn with_default_demand(mut self, avg_daily_units: Decimal, std_daily_units: Decimal) -> Self {
        self.default_avg_daily_units = avg_daily_units;
        self.default_std_daily_units = std_daily_units;
        self
    }

    /// 建構器模式：設置是否並行
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// 檢查全域參數
    ///
    /// 服務水準在端點處 z 值為無窮大，直接拒絕。
    pub fn validate(&self) -> Result<()> {
        let level = self.service_level;
        if !level.is_finite() || level <= 0.0 || level >= 1.0 {
            return Err(ReplenError::InvalidServiceLevel(level));
        }

        if self.review_period_days < 1 {
            return Err(ReplenError::InvalidReviewPeriod(self.review_period_days));
        }

        if self.default_avg_daily_units < Decimal::ZERO {
            return Err(ReplenError::InvalidDefaultDemand(format!(
                "default_avg_daily_units = {}",
                self.default_avg_daily_units
            )));
        }

        if self.default_std_daily_units < Decimal::ZERO {
            return Err(ReplenError::InvalidDefaultDemand(format!(
                "default_std_daily_units = {}",
                self.default_std_daily_units
            )));
        }

        Ok(())
    }
}
