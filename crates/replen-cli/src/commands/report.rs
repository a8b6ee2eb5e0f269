use std::collections::HashMap;

use replen_calc::summary::{below_reorder_point, filter_by_category};
use replen_calc::{ExcludedRow, PlanSummary};
use replen_core::{ProductInfo, ReorderDecision};
use replen_io::ReplenishmentRepository;
use serde::Serialize;

use super::{compute_plan, render_excluded};
use crate::settings::PolicyArgs;

/// 低於再訂購點的一列
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    product_id: &'a str,
    product_name: &'a str,
    category: &'a str,
    supplier_name: &'a str,
    qty_on_hand: u64,
    reorder_point: u64,
    suggested_order_qty: u64,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    service_level: f64,
    review_period_days: u32,
    summary: PlanSummary,
    below_reorder_point: Vec<ReportRow<'a>>,
    excluded: &'a [ExcludedRow],
}

fn report_row<'a>(
    decision: &'a ReorderDecision,
    catalog: &'a HashMap<String, ProductInfo>,
) -> ReportRow<'a> {
    let info = catalog.get(&decision.product_id);
    ReportRow {
        product_id: &decision.product_id,
        product_name: info.map(|i| i.product_name.as_str()).unwrap_or(""),
        category: info.map(|i| i.category.as_str()).unwrap_or(""),
        supplier_name: &decision.supplier_name,
        qty_on_hand: decision.qty_on_hand,
        reorder_point: decision.reorder_point,
        suggested_order_qty: decision.suggested_order_quantity,
    }
}

pub fn run(args: &PolicyArgs, categories: &[String], json: bool) -> anyhow::Result<String> {
    let (repository, config, plan) = compute_plan(args)?;

    let catalog: HashMap<String, ProductInfo> = repository
        .fetch_catalog()?
        .into_iter()
        .map(|info| (info.product_id.clone(), info))
        .collect();

    let selected: Vec<ReorderDecision> = filter_by_category(&plan.decisions, &catalog, categories)
        .into_iter()
        .cloned()
        .collect();
    let summary = PlanSummary::from_decisions(&selected);
    let rows: Vec<ReportRow<'_>> = below_reorder_point(&selected)
        .into_iter()
        .map(|d| report_row(d, &catalog))
        .collect();

    if json {
        let report = Report {
            service_level: config.service_level,
            review_period_days: config.review_period_days,
            summary,
            below_reorder_point: rows,
            excluded: &plan.excluded,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut output = format!(
        "Service level {:.0}%, review period {} days\n\n",
        config.service_level * 100.0,
        config.review_period_days
    );
    output.push_str(&format!(
        "Products: {}   Suppliers: {}   Need reorder: {}   Units to order: {}\n\n",
        summary.products, summary.suppliers, summary.need_reorder, summary.total_suggested_units
    ));

    output.push_str("Products below reorder point\n");
    output.push_str(&format!(
        "{:>8}  {:<18} {:<10} {:<12} {:>7} {:>5} {:>7}\n",
        "id", "name", "category", "supplier", "on_hand", "rop", "order"
    ));
    for row in &rows {
        output.push_str(&format!(
            "{:>8}  {:<18} {:<10} {:<12} {:>7} {:>5} {:>7}\n",
            row.product_id,
            row.product_name,
            row.category,
            row.supplier_name,
            row.qty_on_hand,
            row.reorder_point,
            row.suggested_order_qty
        ));
    }
    output.push_str(&render_excluded(&plan));

    Ok(output)
}
