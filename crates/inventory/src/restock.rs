//! Restock planning: which items to reorder, how many, and at what cost.

use serde::Serialize;

use dromed_core::ValueObject;

use crate::record::InventoryRecord;

/// Order-up-to rule for restock quantities.
///
/// `quantity_to_order = reorder_point * target_multiplier - current_stock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RestockPolicy {
    pub target_multiplier: u32,
}

impl RestockPolicy {
    pub const DEFAULT_TARGET_MULTIPLIER: u32 = 2;

    pub fn new(target_multiplier: u32) -> Self {
        Self { target_multiplier }
    }
}

impl Default for RestockPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TARGET_MULTIPLIER)
    }
}

/// Irregularity detected while deriving a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RestockAnomaly {
    /// The order-up-to formula went negative; the quantity was clamped to 0.
    NegativeQuantity { raw: i64 },
}

impl core::fmt::Display for RestockAnomaly {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RestockAnomaly::NegativeQuantity { raw } => {
                write!(f, "computed order quantity {raw} was negative; clamped to 0")
            }
        }
    }
}

/// One recommended reorder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestockLine {
    pub product: String,
    pub category: String,
    pub current_stock: u32,
    pub reorder_point: u32,
    pub quantity_to_order: u64,
    pub unit_price: f64,
    pub estimated_cost: f64,
    pub supplier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly: Option<RestockAnomaly>,
}

impl ValueObject for RestockLine {}

/// Ordered restock recommendations for one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RestockPlan {
    lines: Vec<RestockLine>,
    total_estimated_cost: f64,
}

impl RestockPlan {
    pub fn lines(&self) -> &[RestockLine] {
        &self.lines
    }

    /// Raw sum of every line's estimated cost (no currency formatting).
    pub fn total_estimated_cost(&self) -> f64 {
        self.total_estimated_cost
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Lines that were clamped or otherwise flagged.
    pub fn anomalies(&self) -> impl Iterator<Item = &RestockLine> {
        self.lines.iter().filter(|l| l.anomaly.is_some())
    }
}

/// Build the line item for a record, or `None` when stock is above the reorder point.
pub fn restock_line(record: &InventoryRecord, policy: &RestockPolicy) -> Option<RestockLine> {
    if record.current_stock > record.reorder_point {
        return None;
    }

    let raw = i128::from(record.reorder_point) * i128::from(policy.target_multiplier)
        - i128::from(record.current_stock);

    let (quantity_to_order, anomaly) = if raw < 0 {
        // Stock is bounded by u32, so a negative raw value always fits in i64.
        let raw = raw as i64;
        tracing::warn!(
            product = %record.product,
            raw_quantity = raw,
            "negative restock quantity clamped to zero"
        );
        (0, Some(RestockAnomaly::NegativeQuantity { raw }))
    } else {
        // reorder_point * multiplier is below 2^64 for u32 operands.
        (raw as u64, None)
    };

    Some(RestockLine {
        product: record.product.clone(),
        category: record.category.clone(),
        current_stock: record.current_stock,
        reorder_point: record.reorder_point,
        quantity_to_order,
        unit_price: record.unit_price,
        estimated_cost: quantity_to_order as f64 * record.unit_price,
        supplier: record.supplier.clone(),
        anomaly,
    })
}

/// Select records at or below their reorder point and price their reorders.
///
/// Accepts raw or classified records; input order is preserved.
pub fn plan_restock<R: AsRef<InventoryRecord>>(records: &[R], policy: &RestockPolicy) -> RestockPlan {
    let lines: Vec<RestockLine> = records
        .iter()
        .filter_map(|r| restock_line(r.as_ref(), policy))
        .collect();
    let total_estimated_cost = lines.iter().map(|l| l.estimated_cost).sum();

    RestockPlan {
        lines,
        total_estimated_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{StockThresholds, classify};
    use crate::record::fixtures::record;
    use proptest::prelude::*;

    #[test]
    fn aspirin_example_orders_up_to_twice_reorder_point() {
        let records = vec![record("Aspirin 325mg", 50, 10.0, 140, 5.0)];
        let plan = plan_restock(&records, &RestockPolicy::default());

        assert_eq!(plan.len(), 1);
        let line = &plan.lines()[0];
        assert_eq!(line.product, "Aspirin 325mg");
        assert_eq!(line.quantity_to_order, 230);
        assert_eq!(line.estimated_cost, 1150.0);
        assert_eq!(line.anomaly, None);
        assert_eq!(plan.total_estimated_cost(), 1150.0);
    }

    #[test]
    fn stock_equal_to_reorder_point_triggers_restock() {
        let records = vec![record("Gauze Rolls", 140, 10.0, 140, 2.5)];
        let plan = plan_restock(&records, &RestockPolicy::default());
        assert_eq!(plan.lines()[0].quantity_to_order, 140);
    }

    #[test]
    fn stock_above_reorder_point_is_skipped() {
        let records = vec![record("Gauze Rolls", 141, 10.0, 140, 2.5)];
        assert!(plan_restock(&records, &RestockPolicy::default()).is_empty());
    }

    #[test]
    fn works_on_classified_records() {
        let records = vec![
            record("A", 10, 1.0, 20, 1.0),
            record("B", 100, 1.0, 20, 1.0),
            record("C", 0, 1.0, 5, 3.0),
        ];
        let classified = classify(&records, &StockThresholds::default());
        let from_classified = plan_restock(classified.records(), &RestockPolicy::default());
        let from_raw = plan_restock(&records, &RestockPolicy::default());

        assert_eq!(from_classified, from_raw);
        let names: Vec<_> = from_raw.lines().iter().map(|l| l.product.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(from_raw.total_estimated_cost(), 30.0 + 30.0);
    }

    #[test]
    fn negative_quantity_is_clamped_and_flagged() {
        // Multiplier 0 makes the target zero: 0 * 40 - 25 = -25.
        let records = vec![record("Splints", 25, 1.0, 40, 9.0)];
        let plan = plan_restock(&records, &RestockPolicy::new(0));

        let line = &plan.lines()[0];
        assert_eq!(line.quantity_to_order, 0);
        assert_eq!(line.estimated_cost, 0.0);
        assert_eq!(line.anomaly, Some(RestockAnomaly::NegativeQuantity { raw: -25 }));
        assert_eq!(plan.anomalies().count(), 1);
    }

    #[test]
    fn empty_input_yields_empty_plan() {
        let plan = plan_restock::<InventoryRecord>(&[], &RestockPolicy::default());
        assert!(plan.is_empty());
        assert_eq!(plan.total_estimated_cost(), 0.0);
    }

    #[test]
    fn anomaly_is_omitted_from_json_when_absent() {
        let records = vec![record("Aspirin 325mg", 50, 10.0, 140, 5.0)];
        let plan = plan_restock(&records, &RestockPolicy::default());
        let json = serde_json::to_value(&plan.lines()[0]).unwrap();
        assert!(json.get("anomaly").is_none());
        assert_eq!(json["quantity_to_order"], 230);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a line exists iff stock <= reorder point, quantities are
        /// never negative, and cost is exactly quantity x price.
        #[test]
        fn restock_lines_follow_reorder_rule(
            rows in prop::collection::vec((0u32..2_000, 0u32..2_000, 0.0f64..500.0), 0..40),
            multiplier in 0u32..4,
        ) {
            let records: Vec<_> = rows
                .iter()
                .map(|(stock, rp, price)| record("p", *stock, 1.0, *rp, *price))
                .collect();
            let plan = plan_restock(&records, &RestockPolicy::new(multiplier));

            let expected = records.iter().filter(|r| r.current_stock <= r.reorder_point).count();
            prop_assert_eq!(plan.len(), expected);

            for line in plan.lines() {
                prop_assert!(line.current_stock <= line.reorder_point);
                prop_assert_eq!(line.estimated_cost, line.quantity_to_order as f64 * line.unit_price);
                let raw = i64::from(line.reorder_point) * i64::from(multiplier) - i64::from(line.current_stock);
                if raw < 0 {
                    prop_assert_eq!(line.quantity_to_order, 0);
                    prop_assert!(line.anomaly.is_some());
                } else {
                    prop_assert_eq!(line.quantity_to_order, raw as u64);
                    prop_assert!(line.anomaly.is_none());
                }
            }
        }
    }
}
