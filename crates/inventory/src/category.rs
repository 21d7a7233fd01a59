//! Per-category rollups of stock and pricing.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::numeric::round_half_even;
use crate::record::InventoryRecord;

/// Statistics for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryStats {
    pub total_stock: u64,
    /// Mean unit price, rounded to two decimals.
    pub mean_unit_price: f64,
    pub product_count: usize,
}

/// Category name -> stats, iterated in ascending category-name order.
///
/// Keys are compared exactly (case-sensitive, no trimming).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategorySummary {
    categories: BTreeMap<String, CategoryStats>,
}

impl CategorySummary {
    pub fn get(&self, category: &str) -> Option<&CategoryStats> {
        self.categories.get(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryStats)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn total_stock(&self) -> u64 {
        self.categories.values().map(|s| s.total_stock).sum()
    }

    pub fn total_products(&self) -> usize {
        self.categories.values().map(|s| s.product_count).sum()
    }
}

#[derive(Default)]
struct Accumulator {
    stock: u64,
    price_sum: f64,
    count: usize,
}

/// Group records by category and compute stock sum, mean price and count.
pub fn summarize_categories<R: AsRef<InventoryRecord>>(records: &[R]) -> CategorySummary {
    let mut groups: BTreeMap<String, Accumulator> = BTreeMap::new();

    for record in records {
        let record = record.as_ref();
        let acc = groups.entry(record.category.clone()).or_default();
        acc.stock += u64::from(record.current_stock);
        acc.price_sum += record.unit_price;
        acc.count += 1;
    }

    let categories = groups
        .into_iter()
        .map(|(category, acc)| {
            let stats = CategoryStats {
                total_stock: acc.stock,
                mean_unit_price: round_half_even(acc.price_sum / acc.count as f64, 2),
                product_count: acc.count,
            };
            (category, stats)
        })
        .collect();

    CategorySummary { categories }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::{in_category, record};
    use proptest::prelude::*;

    #[test]
    fn groups_by_exact_category() {
        let records = vec![
            in_category(record("Aspirin 325mg", 50, 10.0, 140, 5.0), "Medications"),
            in_category(record("Gauze Rolls", 200, 5.0, 70, 2.0), "First Aid"),
            in_category(record("Ibuprofen 400mg", 150, 10.0, 140, 10.0), "Medications"),
            in_category(record("Splints", 30, 1.0, 14, 3.0), "first aid"),
        ];
        let summary = summarize_categories(&records);

        assert_eq!(summary.len(), 3);
        let meds = summary.get("Medications").unwrap();
        assert_eq!(meds.total_stock, 200);
        assert_eq!(meds.mean_unit_price, 7.5);
        assert_eq!(meds.product_count, 2);
        assert_eq!(summary.get("First Aid").unwrap().product_count, 1);
        assert_eq!(summary.get("first aid").unwrap().product_count, 1);
    }

    #[test]
    fn iterates_in_sorted_category_order() {
        let records = vec![
            in_category(record("a", 1, 1.0, 1, 1.0), "Medications"),
            in_category(record("b", 1, 1.0, 1, 1.0), "Emergency Supplies"),
            in_category(record("c", 1, 1.0, 1, 1.0), "First Aid"),
        ];
        let names: Vec<_> = summarize_categories(&records).iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(names, vec!["Emergency Supplies", "First Aid", "Medications"]);
    }

    #[test]
    fn mean_price_rounds_to_cents() {
        let records = vec![
            record("a", 1, 1.0, 1, 1.0),
            record("b", 1, 1.0, 1, 1.0),
            record("c", 1, 1.0, 1, 2.0),
        ];
        let summary = summarize_categories(&records);
        assert_eq!(summary.get("Medications").unwrap().mean_unit_price, 1.33);
    }

    #[test]
    fn empty_input_yields_empty_mapping() {
        let summary = summarize_categories::<InventoryRecord>(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.total_stock(), 0);
    }

    #[test]
    fn serializes_as_map() {
        let records = vec![record("a", 3, 1.0, 1, 2.0)];
        let json = serde_json::to_value(summarize_categories(&records)).unwrap();
        assert_eq!(json["Medications"]["total_stock"], 3);
        assert_eq!(json["Medications"]["product_count"], 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: grouping conserves stock and record counts.
        #[test]
        fn rollup_conserves_totals(
            rows in prop::collection::vec((0u32..10_000, 0.0f64..500.0, 0usize..4), 0..60),
        ) {
            const CATEGORIES: [&str; 4] = ["Medications", "First Aid", "Emergency Supplies", "Medical Devices"];
            let records: Vec<_> = rows
                .iter()
                .map(|(stock, price, cat)| in_category(record("p", *stock, 1.0, 0, *price), CATEGORIES[*cat]))
                .collect();
            let summary = summarize_categories(&records);

            let total: u64 = records.iter().map(|r| u64::from(r.current_stock)).sum();
            prop_assert_eq!(summary.total_stock(), total);
            prop_assert_eq!(summary.total_products(), records.len());
        }
    }
}
