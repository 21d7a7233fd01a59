//! Inventory analysis engine.
//!
//! This crate contains the decision logic for medical-supply stock tracking,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).
//! Every analysis call takes an explicit [`Snapshot`] (or record slice) and
//! returns new values; nothing is cached between calls.

pub mod category;
pub mod classifier;
pub mod query;
pub mod record;
pub mod report;
pub mod restock;

mod numeric;

pub use category::{CategoryStats, CategorySummary, summarize_categories};
pub use classifier::{
    ClassifiedRecord, StatusSummary, StockClassification, StockStatus, StockThresholds, classify,
};
pub use query::{Page, RecordFilter, filter_records, paginate, search_by_product};
pub use record::{InventoryRecord, Snapshot};
pub use report::{ArtifactKind, ReportArtifact, ReportAssembler, ReportBundle, ReportSink};
pub use restock::{RestockAnomaly, RestockLine, RestockPlan, RestockPolicy, plan_restock};
