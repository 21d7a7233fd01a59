//! Stock classification: remaining days of supply and urgency status.
//!
//! Model:
//! - `remaining_days = current_stock / avg_daily_usage`, rounded to one decimal.
//! - Start at [`StockStatus::Ok`], escalate to `Warning` at or below
//!   `warning_days`, then to `Critical` at or below `critical_days`.
//! - Records without usage data have no projection and stay `Ok`.

use serde::{Deserialize, Serialize};

use dromed_core::{DomainError, DomainResult, ValueObject};

use crate::numeric::round_half_even;
use crate::record::InventoryRecord;

/// Urgency classification derived from remaining days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "OK")]
    Ok,
    Warning,
    Critical,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Ok => "OK",
            StockStatus::Warning => "Warning",
            StockStatus::Critical => "Critical",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Day thresholds for the classifier.
///
/// Invariant: both finite, non-negative, and `critical_days <= warning_days`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StockThresholds {
    critical_days: f64,
    warning_days: f64,
}

impl StockThresholds {
    pub const DEFAULT_CRITICAL_DAYS: f64 = 7.0;
    pub const DEFAULT_WARNING_DAYS: f64 = 14.0;

    pub fn new(critical_days: f64, warning_days: f64) -> DomainResult<Self> {
        if !critical_days.is_finite() || critical_days < 0.0 {
            return Err(DomainError::invalid_field(
                "critical_days",
                "must be a finite non-negative number",
            ));
        }
        if !warning_days.is_finite() || warning_days < 0.0 {
            return Err(DomainError::invalid_field(
                "warning_days",
                "must be a finite non-negative number",
            ));
        }
        if critical_days > warning_days {
            return Err(DomainError::validation(format!(
                "critical_days ({critical_days}) must not exceed warning_days ({warning_days})"
            )));
        }
        Ok(Self {
            critical_days,
            warning_days,
        })
    }

    pub fn critical_days(&self) -> f64 {
        self.critical_days
    }

    pub fn warning_days(&self) -> f64 {
        self.warning_days
    }

    /// Classify a projected number of days; `None` means no usage data.
    pub fn status_for(&self, remaining_days: Option<f64>) -> StockStatus {
        let Some(days) = remaining_days else {
            return StockStatus::Ok;
        };

        let mut status = StockStatus::Ok;
        if days <= self.warning_days {
            status = StockStatus::Warning;
        }
        if days <= self.critical_days {
            status = StockStatus::Critical;
        }
        status
    }
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self {
            critical_days: Self::DEFAULT_CRITICAL_DAYS,
            warning_days: Self::DEFAULT_WARNING_DAYS,
        }
    }
}

/// Projected days of stock left, rounded to one decimal.
///
/// Returns `None` when the record has no usage data (zero daily usage).
pub fn remaining_days(record: &InventoryRecord) -> Option<f64> {
    if !record.has_usage() {
        return None;
    }
    Some(round_half_even(
        f64::from(record.current_stock) / record.avg_daily_usage,
        1,
    ))
}

/// A record annotated with its derived, transient fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedRecord {
    #[serde(flatten)]
    pub record: InventoryRecord,
    pub remaining_days: Option<f64>,
    pub status: StockStatus,
}

impl ValueObject for ClassifiedRecord {}

impl AsRef<InventoryRecord> for ClassifiedRecord {
    fn as_ref(&self) -> &InventoryRecord {
        &self.record
    }
}

/// Count of records per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub critical: usize,
    pub warning: usize,
    pub ok: usize,
}

impl StatusSummary {
    pub fn total(&self) -> usize {
        self.critical + self.warning + self.ok
    }
}

/// Output of one classification pass.
///
/// Each partition preserves input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StockClassification {
    records: Vec<ClassifiedRecord>,
    critical: Vec<ClassifiedRecord>,
    warning: Vec<ClassifiedRecord>,
    ok: Vec<ClassifiedRecord>,
}

impl StockClassification {
    /// Full annotated sequence, in input order.
    pub fn records(&self) -> &[ClassifiedRecord] {
        &self.records
    }

    pub fn critical(&self) -> &[ClassifiedRecord] {
        &self.critical
    }

    pub fn warning(&self) -> &[ClassifiedRecord] {
        &self.warning
    }

    pub fn ok(&self) -> &[ClassifiedRecord] {
        &self.ok
    }

    pub fn summary(&self) -> StatusSummary {
        StatusSummary {
            critical: self.critical.len(),
            warning: self.warning.len(),
            ok: self.ok.len(),
        }
    }
}

/// Annotate every record with remaining days and status.
///
/// Pure: the caller's records are cloned, never mutated.
pub fn classify(records: &[InventoryRecord], thresholds: &StockThresholds) -> StockClassification {
    let mut out = StockClassification::default();

    for record in records {
        let days = remaining_days(record);
        let classified = ClassifiedRecord {
            record: record.clone(),
            remaining_days: days,
            status: thresholds.status_for(days),
        };

        match classified.status {
            StockStatus::Critical => out.critical.push(classified.clone()),
            StockStatus::Warning => out.warning.push(classified.clone()),
            StockStatus::Ok => out.ok.push(classified.clone()),
        }
        out.records.push(classified);
    }

    out
}
