//! Read-side lookups over a snapshot: search, filter and pagination.
//!
//! These are plain predicates and slices used by the presentation layers; they
//! carry no analysis logic.

use serde::{Deserialize, Serialize};

use dromed_core::{DomainError, DomainResult};

use crate::record::InventoryRecord;

/// Case-insensitive substring search on the product name.
pub fn search_by_product<'a>(records: &'a [InventoryRecord], term: &str) -> DomainResult<Vec<&'a InventoryRecord>> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Err(DomainError::validation("no search term provided"));
    }

    Ok(records
        .iter()
        .filter(|r| r.product.to_lowercase().contains(&needle))
        .collect())
}

/// Optional substring criteria; a record must satisfy every criterion given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub location: Option<String>,
}

impl RecordFilter {
    pub fn matches(&self, record: &InventoryRecord) -> bool {
        contains_ci(&record.category, self.category.as_deref())
            && contains_ci(&record.supplier, self.supplier.as_deref())
            && contains_ci(&record.storage_location, self.location.as_deref())
    }
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle.map(str::trim) {
        None | Some("") => true,
        Some(n) => haystack.to_lowercase().contains(&n.to_lowercase()),
    }
}

pub fn filter_records<'a>(records: &'a [InventoryRecord], filter: &RecordFilter) -> Vec<&'a InventoryRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// One page of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a> {
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub data: &'a [InventoryRecord],
}

/// Slice out 1-based page `page` of size `per_page`.
///
/// Pages past the end are empty rather than errors.
pub fn paginate(records: &[InventoryRecord], page: usize, per_page: usize) -> DomainResult<Page<'_>> {
    if page < 1 || per_page < 1 {
        return Err(DomainError::validation("page and per_page must be positive integers"));
    }

    let start = (page - 1).saturating_mul(per_page).min(records.len());
    let end = start.saturating_add(per_page).min(records.len());

    Ok(Page {
        page,
        per_page,
        total_items: records.len(),
        data: &records[start..end],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::{in_category, record};

    fn sample() -> Vec<InventoryRecord> {
        let mut gauze = in_category(record("Gauze Rolls", 200, 5.0, 70, 2.0), "First Aid");
        gauze.supplier = "MedLine Industries".to_string();
        gauze.storage_location = "Zone-B7".to_string();
        vec![
            record("Aspirin 325mg", 50, 10.0, 140, 5.0),
            gauze,
            record("Ibuprofen 400mg", 150, 10.0, 140, 10.0),
        ]
    }

    #[test]
    fn search_is_case_insensitive() {
        let records = sample();
        let found = search_by_product(&records, "ASPIRIN").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].product, "Aspirin 325mg");

        let found = search_by_product(&records, "mg").unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn blank_search_term_is_rejected() {
        let err = search_by_product(&sample(), "  ").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn filter_combines_criteria() {
        let records = sample();
        let filter = RecordFilter {
            category: Some("first".to_string()),
            supplier: Some("medline".to_string()),
            location: None,
        };
        let found = filter_records(&records, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].product, "Gauze Rolls");

        let filter = RecordFilter {
            location: Some("zone-a".to_string()),
            ..RecordFilter::default()
        };
        assert_eq!(filter_records(&records, &filter).len(), 2);
    }

    #[test]
    fn empty_filter_matches_everything() {
        let records = sample();
        assert_eq!(filter_records(&records, &RecordFilter::default()).len(), 3);
    }

    #[test]
    fn paginate_slices_pages() {
        let records = sample();
        let page = paginate(&records, 2, 2).unwrap();
        assert_eq!(page.total_items, 3);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].product, "Ibuprofen 400mg");

        let past_end = paginate(&records, 10, 2).unwrap();
        assert!(past_end.data.is_empty());
    }

    #[test]
    fn paginate_rejects_zero() {
        assert!(paginate(&sample(), 0, 10).is_err());
        assert!(paginate(&sample(), 1, 0).is_err());
    }
}
