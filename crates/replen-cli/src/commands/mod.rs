pub mod generate;
pub mod plan;
pub mod report;

use anyhow::Context;
use replen_calc::{ReorderCalculator, ReorderPlan};
use replen_core::PolicyConfig;
use replen_io::{load_feeds, CsvRepository};

use crate::settings::{resolve_policy, PolicyArgs};

/// 讀取資料並計算補貨計畫
pub(crate) fn compute_plan(
    args: &PolicyArgs,
) -> anyhow::Result<(CsvRepository, PolicyConfig, ReorderPlan)> {
    let config = resolve_policy(args)?;
    let repository = CsvRepository::open(&args.data)
        .with_context(|| format!("無法讀取資料目錄 {}", args.data.display()))?;
    let feeds = load_feeds(&repository)?;

    let plan = ReorderCalculator::new(config.clone()).calculate(
        &feeds.demand,
        &feeds.inventory,
        &feeds.suppliers,
    )?;

    Ok((repository, config, plan))
}

/// 排除列的文字摘要
pub(crate) fn render_excluded(plan: &ReorderPlan) -> String {
    if plan.excluded.is_empty() {
        return String::new();
    }

    let mut out = format!("\nExcluded products: {}\n", plan.excluded.len());
    for row in &plan.excluded {
        out.push_str(&format!("  - {} [{}] {}\n", row.product_id, row.kind, row.message));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn policy_args(data: PathBuf) -> PolicyArgs {
        PolicyArgs {
            data,
            config: None,
            service_level: None,
            review_period: None,
            sequential: false,
        }
    }

    #[test]
    fn test_generate_plan_and_report() {
        let dir = tempfile::TempDir::new().unwrap();
        let data = dir.path().join("raw");
        generate::run(&data, 42, 30).unwrap();

        let out = dir.path().join("processed").join("reorder_plan.csv");
        let text = plan::run(&policy_args(data.clone()), &out).unwrap();
        assert!(text.contains("Reorder plan saved"));

        let csv = std::fs::read_to_string(&out).unwrap();
        // 表頭加 20 個產品
        assert_eq!(csv.lines().count(), 21);

        let json = report::run(&policy_args(data), &["Spirits".to_string()], true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["products"], 6);
        assert_eq!(value["review_period_days"], 7);
    }

    #[test]
    fn test_missing_data_dir_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = compute_plan(&policy_args(dir.path().join("nope")));
        assert!(result.is_err());
    }
}
