use std::path::Path;

use anyhow::Context;
use chrono::{Duration, Local};
use replen_io::{SynthConfig, SyntheticDataset};

/// 產生模擬資料，最後一天為今天
pub fn run(out: &Path, seed: u64, days: u32) -> anyhow::Result<String> {
    anyhow::ensure!(days > 0, "days must be at least 1");

    let start_date = Local::now().date_naive() - Duration::days(i64::from(days) - 1);
    let config = SynthConfig::new(seed, start_date).with_days(days);
    let dataset = SyntheticDataset::generate(&config).context("無法產生模擬資料")?;

    dataset
        .write_to_dir(out)
        .with_context(|| format!("無法寫入 {}", out.display()))?;

    Ok(format!(
        "Synthetic CSVs generated in {} ({} suppliers, {} products, {} sales rows, {} snapshots)",
        out.display(),
        dataset.suppliers.len(),
        dataset.products.len(),
        dataset.sales.len(),
        dataset.inventory_snapshots.len()
    ))
}
