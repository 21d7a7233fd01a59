use std::sync::Arc;

use dromed_infra::{LoadError, SnapshotSource};
use dromed_inventory::{ReportAssembler, ReportBundle, Snapshot, StockThresholds};

/// Shared handler state.
///
/// Holds no records: every call loads a fresh snapshot from the source.
pub struct AppServices {
    source: Arc<dyn SnapshotSource>,
    assembler: ReportAssembler,
}

impl AppServices {
    pub fn new(source: Arc<dyn SnapshotSource>, assembler: ReportAssembler) -> Self {
        Self { source, assembler }
    }

    pub fn snapshot(&self) -> Result<Snapshot, LoadError> {
        self.source.load()
    }

    pub fn default_thresholds(&self) -> StockThresholds {
        *self.assembler.thresholds()
    }

    /// Load and analyse, optionally overriding the configured thresholds.
    pub fn analyze(&self, thresholds: Option<StockThresholds>) -> Result<ReportBundle, LoadError> {
        let snapshot = self.snapshot()?;
        let assembler = match thresholds {
            Some(t) => ReportAssembler::new(t, *self.assembler.policy()),
            None => self.assembler,
        };
        Ok(assembler.assemble(&snapshot))
    }
}
