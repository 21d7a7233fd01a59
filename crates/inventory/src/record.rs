//! Inventory record and snapshot model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use dromed_core::{DomainError, DomainResult, ValueObject};

/// One product's current stock, usage and pricing facts.
///
/// Records are value objects: product names are not unique, and two rows with
/// the same name are tracked independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub product: String,
    pub category: String,
    /// Units on hand.
    pub current_stock: u32,
    /// Average units consumed per day. Zero means "no usage data".
    pub avg_daily_usage: f64,
    /// Stock level at or below which a reorder is triggered.
    pub reorder_point: u32,
    pub unit_price: f64,
    pub last_restock_date: NaiveDate,
    pub supplier: String,
    pub storage_location: String,
}

impl ValueObject for InventoryRecord {}

impl AsRef<InventoryRecord> for InventoryRecord {
    fn as_ref(&self) -> &InventoryRecord {
        self
    }
}

impl InventoryRecord {
    /// Check the fields the type system cannot express.
    ///
    /// Errors name the offending field so a loader can point at the bad cell.
    pub fn validate(&self) -> DomainResult<()> {
        if self.product.trim().is_empty() {
            return Err(DomainError::invalid_field("product", "cannot be empty"));
        }
        if !self.avg_daily_usage.is_finite() || self.avg_daily_usage < 0.0 {
            return Err(DomainError::invalid_field(
                "avg_daily_usage",
                format!("must be a finite non-negative number, got {}", self.avg_daily_usage),
            ));
        }
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(DomainError::invalid_field(
                "unit_price",
                format!("must be a finite non-negative number, got {}", self.unit_price),
            ));
        }
        Ok(())
    }

    /// Whether usage data exists to project depletion from.
    pub fn has_usage(&self) -> bool {
        self.avg_daily_usage > 0.0
    }
}

/// One immutable, point-in-time collection of records analysed as a unit.
///
/// Construction validates every record; afterwards the snapshot is read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    records: Vec<InventoryRecord>,
}

impl Snapshot {
    pub fn new(records: Vec<InventoryRecord>) -> DomainResult<Self> {
        for (index, record) in records.iter().enumerate() {
            record.validate().map_err(|e| match e {
                DomainError::Validation(msg) => {
                    DomainError::validation(format!("record {index}: {msg}"))
                }
                other => other,
            })?;
        }
        Ok(Self { records })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<InventoryRecord> {
        self.records
    }
}
