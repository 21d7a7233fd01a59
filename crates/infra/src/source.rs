//! Snapshot sources: where an analysis pass gets its records from.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dromed_inventory::Snapshot;

use crate::loader::{LoadError, load_snapshot_file};

/// Supplies a fresh snapshot per call.
///
/// Implementations must not hand out state shared with earlier calls; each
/// analysis pass owns what it loads.
pub trait SnapshotSource: Send + Sync {
    fn load(&self) -> Result<Snapshot, LoadError>;
}

impl<S> SnapshotSource for Arc<S>
where
    S: SnapshotSource + ?Sized,
{
    fn load(&self) -> Result<Snapshot, LoadError> {
        (**self).load()
    }
}

/// Re-reads a CSV sheet on every call, so edits to the file are picked up.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for CsvFileSource {
    fn load(&self) -> Result<Snapshot, LoadError> {
        load_snapshot_file(&self.path)
    }
}

/// Fixed snapshot for tests/dev; every call returns a copy.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    snapshot: Snapshot,
}

impl InMemorySource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

impl SnapshotSource for InMemorySource {
    fn load(&self) -> Result<Snapshot, LoadError> {
        Ok(self.snapshot.clone())
    }
}
