//! 策略參數：TOML 配置檔加命令列覆寫

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use replen_core::PolicyConfig;

/// 計算類指令共用參數
#[derive(Debug, Clone, Args)]
pub struct PolicyArgs {
    /// 原始資料目錄
    #[arg(long, default_value = "data/raw")]
    pub data: PathBuf,

    /// 策略配置檔（TOML）
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// 目標服務水準，覆寫配置檔
    #[arg(long)]
    pub service_level: Option<f64>,

    /// 檢視週期（天），覆寫配置檔
    #[arg(long)]
    pub review_period: Option<u32>,

    /// 循序計算
    #[arg(long)]
    pub sequential: bool,
}

/// 讀取配置檔
pub fn load_config_file(path: &Path) -> anyhow::Result<PolicyConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("無法讀取配置檔 {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("配置檔格式錯誤 {}", path.display()))
}

/// 合併配置檔與命令列覆寫
pub fn resolve_policy(args: &PolicyArgs) -> anyhow::Result<PolicyConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => PolicyConfig::default(),
    };

    if let Some(level) = args.service_level {
        config.service_level = level;
    }
    if let Some(days) = args.review_period {
        config.review_period_days = days;
    }
    if args.sequential {
        config.parallel = false;
    }

    config.validate().context("策略參數無效")?;
    tracing::debug!(?config, "策略參數");
    Ok(config)
}
