use std::path::Path;

use replen_calc::PlanSummary;
use replen_io::write_plan_file;

use super::{compute_plan, render_excluded};
use crate::settings::PolicyArgs;

const PREVIEW_ROWS: usize = 10;

pub fn run(args: &PolicyArgs, out: &Path) -> anyhow::Result<String> {
    let (_, _, plan) = compute_plan(args)?;
    write_plan_file(out, &plan.decisions)?;

    let summary = PlanSummary::from_decisions(&plan.decisions);
    let mut output = format!(
        "Reorder plan saved to {} (z = {:.4})\n\n",
        out.display(),
        plan.safety_factor
    );

    output.push_str(&format!(
        "{:>10} {:>14} {:>6} {:>6} {:>6} {:>6} {:>8}\n",
        "product", "supplier", "on_hand", "ss", "rop", "below", "order"
    ));
    for d in plan.decisions.iter().take(PREVIEW_ROWS) {
        output.push_str(&format!(
            "{:>10} {:>14} {:>6} {:>6} {:>6} {:>6} {:>8}\n",
            d.product_id,
            d.supplier_name,
            d.qty_on_hand,
            d.safety_stock,
            d.reorder_point,
            d.below_reorder_point,
            d.suggested_order_quantity
        ));
    }

    output.push_str(&format!(
        "\n{} products, {} below reorder point, {} units suggested",
        summary.products, summary.need_reorder, summary.total_suggested_units
    ));
    output.push_str(&render_excluded(&plan));

    Ok(output)
}
