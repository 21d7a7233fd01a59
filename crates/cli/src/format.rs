//! Human-readable rendering of analysis output.

use std::fmt::Write as _;

use dromed_inventory::{ClassifiedRecord, RestockPlan, StatusSummary};

/// `$1,234.50` style: two decimals, comma thousands separators.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

pub fn render_status_summary(summary: &StatusSummary) -> String {
    format!(
        "Inventory Status Summary:\nCritical Items: {}\nWarning Items: {}\nOK Items: {}\n",
        summary.critical, summary.warning, summary.ok
    )
}

pub fn render_critical_items(items: &[ClassifiedRecord]) -> String {
    let width = product_width(items.iter().map(|c| c.record.product.as_str()));
    let mut out = String::from("Critical Items (Need Immediate Attention):\n");
    let _ = writeln!(
        out,
        "{:<width$}  {:>13}  {:>14}  {}",
        "Product", "Current_Stock", "Remaining_Days", "Supplier"
    );
    for item in items {
        let days = item
            .remaining_days
            .map(|d| format!("{d:.1}"))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<width$}  {:>13}  {:>14}  {}",
            item.record.product, item.record.current_stock, days, item.record.supplier
        );
    }
    out
}

pub fn render_restock_plan(plan: &RestockPlan) -> String {
    let width = product_width(plan.lines().iter().map(|l| l.product.as_str()));
    let mut out = String::from("Restock Order Recommendations:\n");
    let _ = writeln!(
        out,
        "{:<width$}  {:>13}  {:>13}  {:>17}  {:>10}  {:>14}  {}",
        "Product", "Current_Stock", "Reorder_Point", "Quantity_To_Order", "Unit_Price", "Estimated_Cost", "Supplier"
    );
    for line in plan.lines() {
        let _ = writeln!(
            out,
            "{:<width$}  {:>13}  {:>13}  {:>17}  {:>10.2}  {:>14.2}  {}",
            line.product,
            line.current_stock,
            line.reorder_point,
            line.quantity_to_order,
            line.unit_price,
            line.estimated_cost,
            line.supplier
        );
        if let Some(anomaly) = line.anomaly {
            let _ = writeln!(out, "  ! {anomaly}");
        }
    }
    let _ = writeln!(
        out,
        "\nTotal Estimated Restock Cost: {}",
        format_currency(plan.total_estimated_cost())
    );
    out
}

fn product_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0).max("Product".len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_has_separators_and_cents() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(5.5), "$5.50");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1150.0), "$1,150.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-2500.0), "-$2,500.00");
    }

    #[test]
    fn status_summary_lists_counts() {
        let text = render_status_summary(&StatusSummary { critical: 2, warning: 1, ok: 7 });
        assert!(text.contains("Critical Items: 2"));
        assert!(text.contains("Warning Items: 1"));
        assert!(text.contains("OK Items: 7"));
    }
}
