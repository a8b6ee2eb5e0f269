//! 補貨主計算器

use rayon::prelude::*;
use replen_core::{
    InventorySnapshot, PolicyConfig, ProductDemandStats, ReorderDecision, ReplenError, Result,
    RowErrorKind, SupplierTerms,
};

use crate::join::{JoinedRow, PolicyInput};
use crate::policy::ReorderPolicy;
use crate::{ExcludedRow, ReorderPlan};

enum RowOutcome {
    Decided(ReorderDecision),
    Excluded(ExcludedRow),
}

/// 補貨計算器
pub struct ReorderCalculator {
    /// 策略參數
    config: PolicyConfig,
}

impl ReorderCalculator {
    /// 創建新的補貨計算器
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// 主計算入口
    ///
    /// 全域參數無效時整批失敗；單列問題只排除該列。
    pub fn calculate(
        &self,
        demand: &[ProductDemandStats],
        inventory: &[InventorySnapshot],
        suppliers: &[SupplierTerms],
    ) -> Result<ReorderPlan> {
        tracing::info!(
            "開始補貨計算：需求 {} 筆，庫存 {} 筆，供應商條件 {} 筆",
            demand.len(),
            inventory.len(),
            suppliers.len()
        );

        let start_time = std::time::Instant::now();

        // Step 1: 參數檢查與安全係數
        tracing::debug!("Step 1: 參數檢查");
        self.config.validate()?;
        let policy = ReorderPolicy::new(self.config.service_level, self.config.review_period_days)?;
        tracing::debug!(
            "服務水準 {} → 安全係數 z = {:.4}",
            self.config.service_level,
            policy.safety_factor()
        );

        // Step 2: 合併資料
        tracing::debug!("Step 2: 合併資料");
        let joined = crate::join::join_feeds(demand, inventory, suppliers, &self.config)?;

        // Step 3: 逐列計算
        tracing::debug!("Step 3: 逐列計算（並行: {}）", self.config.parallel);
        let outcomes = if self.config.parallel {
            joined
                .into_par_iter()
                .map(|row| Self::evaluate(&policy, row))
                .collect::<Result<Vec<_>>>()?
        } else {
            joined
                .into_iter()
                .map(|row| Self::evaluate(&policy, row))
                .collect::<Result<Vec<_>>>()?
        };

        let mut plan = ReorderPlan::empty(policy.safety_factor());
        for outcome in outcomes {
            match outcome {
                RowOutcome::Decided(decision) => plan.decisions.push(decision),
                RowOutcome::Excluded(row) => {
                    tracing::warn!("排除產品 {}: {} ({})", row.product_id, row.kind, row.message);
                    plan.add_excluded(row);
                }
            }
        }
        plan.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("補貨計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "決策 {} 筆，需補貨 {} 筆，排除 {} 筆",
            plan.decisions.len(),
            plan.decisions.iter().filter(|d| d.below_reorder_point).count(),
            plan.excluded.len()
        );

        Ok(plan)
    }

    fn evaluate(policy: &ReorderPolicy, row: JoinedRow) -> Result<RowOutcome> {
        let input = match row {
            Ok(input) => input,
            Err(excluded) => return Ok(RowOutcome::Excluded(excluded)),
        };
        match Self::decide(policy, &input) {
            Ok(decision) => Ok(RowOutcome::Decided(decision)),
            // 單列數值溢位只排除該列
            Err(ReplenError::NumericOverflow(message)) => Ok(RowOutcome::Excluded(
                ExcludedRow::new(input.product_id, RowErrorKind::NumericOverflow, message),
            )),
            Err(err) => Err(err),
        }
    }

    fn decide(policy: &ReorderPolicy, input: &PolicyInput) -> Result<ReorderDecision> {
        let decision = policy.decide(input)?;
        tracing::trace!(
            "產品 {}: 安全庫存 {}, 再訂購點 {}, 建議訂購 {}",
            decision.product_id,
            decision.safety_stock,
            decision.reorder_point,
            decision.suggested_order_quantity
        );
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn feeds() -> (Vec<ProductDemandStats>, Vec<InventorySnapshot>, Vec<SupplierTerms>) {
        let date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let demand = vec![
            ProductDemandStats::new("1".to_string(), Decimal::from(5), Decimal::from(2)),
            ProductDemandStats::new("2".to_string(), Decimal::from(5), Decimal::from(2)),
            ProductDemandStats::missing("3".to_string()),
            ProductDemandStats::new("4".to_string(), Decimal::from(5), Decimal::from(2)),
        ];
        let inventory = vec![
            InventorySnapshot::new("1".to_string(), date, 50),
            InventorySnapshot::new("2".to_string(), date, 30),
            InventorySnapshot::new("3".to_string(), date, 0),
            InventorySnapshot::new("4".to_string(), date, 10),
        ];
        let suppliers = vec![
            SupplierTerms::new("1".to_string(), "S1".to_string(), "Supplier 1".to_string(), 7, 20),
            SupplierTerms::new("2".to_string(), "S1".to_string(), "Supplier 1".to_string(), 7, 60),
            SupplierTerms::new("3".to_string(), "S2".to_string(), "Supplier 2".to_string(), 9, 10),
        ];
        (demand, inventory, suppliers)
    }

    #[test]
    fn test_calculate_plan() {
        let (demand, inventory, suppliers) = feeds();
        let calculator = ReorderCalculator::new(PolicyConfig::default());
        let plan = calculator.calculate(&demand, &inventory, &suppliers).unwrap();

        assert_eq!(plan.decisions.len(), 3);
        assert_eq!(plan.excluded.len(), 1);
        assert_eq!(plan.excluded[0].product_id, "4");
        assert_eq!(plan.excluded_count(RowErrorKind::IncompleteSupplierData), 1);

        let first = &plan.decisions[0];
        assert_eq!(first.safety_stock, 9);
        assert_eq!(first.reorder_point, 44);
        assert_eq!(first.suggested_order_quantity, 0);

        let second = &plan.decisions[1];
        assert!(second.below_reorder_point);
        assert_eq!(second.suggested_order_quantity, 60);

        // 預設需求 0.5 / 0.7，提前期 9：安全庫存 round(1.645×0.7×3)=3，再訂購點 round(4.5+3)=8
        let third = &plan.decisions[2];
        assert!(third.demand_defaulted);
        assert_eq!(third.safety_stock, 3);
        assert_eq!(third.reorder_point, 8);
        assert!(third.below_reorder_point);
        // round(8 + 3.5 - 0) = 12，高於最小訂購量 10
        assert_eq!(third.suggested_order_quantity, 12);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let (demand, inventory, suppliers) = feeds();
        let parallel = ReorderCalculator::new(PolicyConfig::default().with_parallel(true))
            .calculate(&demand, &inventory, &suppliers)
            .unwrap();
        let sequential = ReorderCalculator::new(PolicyConfig::default().with_parallel(false))
            .calculate(&demand, &inventory, &suppliers)
            .unwrap();

        assert_eq!(parallel.decisions, sequential.decisions);
        assert_eq!(parallel.excluded, sequential.excluded);
    }

    #[test]
    fn test_invalid_service_level_is_fatal() {
        let (demand, inventory, suppliers) = feeds();
        let calculator = ReorderCalculator::new(PolicyConfig::default().with_service_level(1.0));

        assert!(matches!(
            calculator.calculate(&demand, &inventory, &suppliers),
            Err(ReplenError::InvalidServiceLevel(_))
        ));
    }

    #[rstest]
    #[case(Decimal::MAX, Decimal::from(2))]
    #[case(Decimal::from(u64::MAX), Decimal::from(2))]
    #[case(Decimal::from(5), Decimal::MAX)]
    fn test_overflowing_row_is_excluded(
        #[case] avg: Decimal,
        #[case] std: Decimal,
        #[values(true, false)] parallel: bool,
    ) {
        let (mut demand, inventory, mut suppliers) = feeds();
        demand[1] = ProductDemandStats::new("2".to_string(), avg, std);
        suppliers[1] =
            SupplierTerms::new("2".to_string(), "S1".to_string(), "Supplier 1".to_string(), 7, 60);

        let calculator = ReorderCalculator::new(PolicyConfig::default().with_parallel(parallel));
        let plan = calculator.calculate(&demand, &inventory, &suppliers).unwrap();

        assert_eq!(plan.excluded_count(RowErrorKind::NumericOverflow), 1);
        assert!(plan
            .excluded
            .iter()
            .any(|row| row.product_id == "2" && row.kind == RowErrorKind::NumericOverflow));

        let first = plan.decisions.iter().find(|d| d.product_id == "1").unwrap();
        assert_eq!(first.safety_stock, 9);
        assert_eq!(first.reorder_point, 44);
        assert!(plan.decisions.iter().all(|d| d.product_id != "2"));
    }

    #[test]
    fn test_empty_input() {
        let calculator = ReorderCalculator::new(PolicyConfig::default());
        let plan = calculator.calculate(&[], &[], &[]).unwrap();

        assert!(plan.decisions.is_empty());
        assert!(plan.excluded.is_empty());
    }
}
