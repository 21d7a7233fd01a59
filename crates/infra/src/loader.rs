//! CSV inventory loader.
//!
//! Parses the stock sheet into a validated [`Snapshot`]. Expected header:
//!   Product, Category, Current_Stock, Avg_Daily_Usage, Reorder_Point,
//!   Unit_Price, Last_Restock_Date, Supplier, Storage_Location

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use dromed_core::DomainError;
use dromed_inventory::{InventoryRecord, Snapshot};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error at line {line}: {source}")]
    Csv {
        line: usize,
        #[source]
        source: csv::Error,
    },

    #[error("invalid Last_Restock_Date at line {line}: {value:?}")]
    Date { line: usize, value: String },

    #[error("invalid record at line {line}: {source}")]
    Invalid {
        line: usize,
        #[source]
        source: DomainError,
    },
}

/// One CSV row, column names as they appear in the sheet.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub(crate) struct CsvRecordRow {
    #[serde(rename = "Product")]
    product: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Current_Stock")]
    current_stock: u32,
    #[serde(rename = "Avg_Daily_Usage")]
    avg_daily_usage: f64,
    #[serde(rename = "Reorder_Point")]
    reorder_point: u32,
    #[serde(rename = "Unit_Price")]
    unit_price: f64,
    #[serde(rename = "Last_Restock_Date")]
    last_restock_date: String,
    #[serde(rename = "Supplier")]
    supplier: String,
    #[serde(rename = "Storage_Location")]
    storage_location: String,
}

impl CsvRecordRow {
    fn into_record(self, line: usize) -> Result<InventoryRecord, LoadError> {
        let last_restock_date = parse_date(&self.last_restock_date).ok_or_else(|| LoadError::Date {
            line,
            value: self.last_restock_date.clone(),
        })?;

        let record = InventoryRecord {
            product: self.product,
            category: self.category,
            current_stock: self.current_stock,
            avg_daily_usage: self.avg_daily_usage,
            reorder_point: self.reorder_point,
            unit_price: self.unit_price,
            last_restock_date,
            supplier: self.supplier,
            storage_location: self.storage_location,
        };
        record
            .validate()
            .map_err(|source| LoadError::Invalid { line, source })?;
        Ok(record)
    }

    fn from_record(record: &InventoryRecord) -> Self {
        Self {
            product: record.product.clone(),
            category: record.category.clone(),
            current_stock: record.current_stock,
            avg_daily_usage: record.avg_daily_usage,
            reorder_point: record.reorder_point,
            unit_price: record.unit_price,
            last_restock_date: record.last_restock_date.format(DATE_FORMAT).to_string(),
            supplier: record.supplier.clone(),
            storage_location: record.storage_location.clone(),
        }
    }
}

/// Accepts plain dates and full timestamps (the date part is kept).
fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
                .ok()
                .map(|dt| dt.date())
        })
}

/// Load a snapshot from a CSV reader.
pub fn load_snapshot<R: Read>(reader: R) -> Result<Snapshot, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, result) in csv_reader.deserialize::<CsvRecordRow>().enumerate() {
        // Header is line 1.
        let line = index + 2;
        let row = result.map_err(|source| LoadError::Csv { line, source })?;
        records.push(row.into_record(line)?);
    }

    // Rows were validated individually above, so this cannot fail on content.
    Snapshot::new(records).map_err(|source| LoadError::Invalid { line: 0, source })
}

/// Load a snapshot from a CSV file path.
pub fn load_snapshot_file(path: impl AsRef<Path>) -> Result<Snapshot, LoadError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot = load_snapshot(file)?;
    tracing::info!(path = %path.display(), records = snapshot.len(), "loaded inventory snapshot");
    Ok(snapshot)
}

/// Write records in the same sheet format the loader reads.
pub fn write_snapshot_csv<W: Write>(records: &[InventoryRecord], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(CsvRecordRow::from_record(record))?;
    }
    wtr.flush()?;
    Ok(())
}
