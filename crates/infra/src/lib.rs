//! Infrastructure layer: CSV loading, report persistence, mock data, config.
//!
//! Everything here sits around the analysis engine in `dromed-inventory`; none
//! of it makes stock decisions.

pub mod config;
pub mod loader;
pub mod mock_data;
pub mod report_writer;
pub mod source;

pub use config::{ConfigError, Settings};
pub use loader::{LoadError, load_snapshot, load_snapshot_file, write_snapshot_csv};
pub use report_writer::{CsvReportWriter, ReportWriteError};
pub use source::{CsvFileSource, InMemorySource, SnapshotSource};
