//! CSV persistence for report artifacts.
//!
//! Each artifact lands in `<output_dir>/<artifact>_<tag>.csv`.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use dromed_inventory::{
    CategorySummary, ClassifiedRecord, ReportArtifact, ReportSink, RestockPlan,
};

#[derive(Debug, Error)]
pub enum ReportWriteError {
    #[error("failed to prepare '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Serialize)]
struct ClassifiedRow<'a> {
    #[serde(rename = "Product")]
    product: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
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
    supplier: &'a str,
    #[serde(rename = "Storage_Location")]
    storage_location: &'a str,
    #[serde(rename = "Remaining_Days")]
    remaining_days: Option<f64>,
    #[serde(rename = "Status")]
    status: &'static str,
}

impl<'a> From<&'a ClassifiedRecord> for ClassifiedRow<'a> {
    fn from(c: &'a ClassifiedRecord) -> Self {
        let r = &c.record;
        Self {
            product: &r.product,
            category: &r.category,
            current_stock: r.current_stock,
            avg_daily_usage: r.avg_daily_usage,
            reorder_point: r.reorder_point,
            unit_price: r.unit_price,
            last_restock_date: r.last_restock_date.format("%Y-%m-%d").to_string(),
            supplier: &r.supplier,
            storage_location: &r.storage_location,
            remaining_days: c.remaining_days,
            status: c.status.as_str(),
        }
    }
}

#[derive(Serialize)]
struct RestockRow<'a> {
    #[serde(rename = "Product")]
    product: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Current_Stock")]
    current_stock: u32,
    #[serde(rename = "Reorder_Point")]
    reorder_point: u32,
    #[serde(rename = "Quantity_To_Order")]
    quantity_to_order: u64,
    #[serde(rename = "Unit_Price")]
    unit_price: f64,
    #[serde(rename = "Estimated_Cost")]
    estimated_cost: f64,
    #[serde(rename = "Supplier")]
    supplier: &'a str,
    #[serde(rename = "Anomaly")]
    anomaly: Option<String>,
}

#[derive(Serialize)]
struct CategoryRow<'a> {
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Current_Stock")]
    current_stock: u64,
    #[serde(rename = "Unit_Price")]
    unit_price: f64,
    #[serde(rename = "Product")]
    product: usize,
}

/// Writes artifacts as CSV files under one directory.
#[derive(Debug, Clone)]
pub struct CsvReportWriter {
    output_dir: PathBuf,
}

impl CsvReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn write_rows<T: Serialize>(
        path: &Path,
        rows: impl IntoIterator<Item = T>,
        header: &[&str],
    ) -> Result<(), ReportWriteError> {
        let csv_err = |source| ReportWriteError::Csv {
            path: path.to_path_buf(),
            source,
        };

        // Headers are written by hand so empty tables still get a header row.
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(csv_err)?;
        wtr.write_record(header).map_err(csv_err)?;
        for row in rows {
            wtr.serialize(row).map_err(csv_err)?;
        }
        wtr.flush().map_err(|source| ReportWriteError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_classified(path: &Path, rows: &[ClassifiedRecord]) -> Result<(), ReportWriteError> {
        Self::write_rows(
            path,
            rows.iter().map(ClassifiedRow::from),
            &[
                "Product",
                "Category",
                "Current_Stock",
                "Avg_Daily_Usage",
                "Reorder_Point",
                "Unit_Price",
                "Last_Restock_Date",
                "Supplier",
                "Storage_Location",
                "Remaining_Days",
                "Status",
            ],
        )
    }

    fn write_restock(path: &Path, plan: &RestockPlan) -> Result<(), ReportWriteError> {
        let rows = plan.lines().iter().map(|l| RestockRow {
            product: &l.product,
            category: &l.category,
            current_stock: l.current_stock,
            reorder_point: l.reorder_point,
            quantity_to_order: l.quantity_to_order,
            unit_price: l.unit_price,
            estimated_cost: l.estimated_cost,
            supplier: &l.supplier,
            anomaly: l.anomaly.map(|a| a.to_string()),
        });
        Self::write_rows(
            path,
            rows,
            &[
                "Product",
                "Category",
                "Current_Stock",
                "Reorder_Point",
                "Quantity_To_Order",
                "Unit_Price",
                "Estimated_Cost",
                "Supplier",
                "Anomaly",
            ],
        )
    }

    fn write_categories(path: &Path, summary: &CategorySummary) -> Result<(), ReportWriteError> {
        let rows = summary.iter().map(|(category, stats)| CategoryRow {
            category,
            current_stock: stats.total_stock,
            unit_price: stats.mean_unit_price,
            product: stats.product_count,
        });
        Self::write_rows(
            path,
            rows,
            &["Category", "Current_Stock", "Unit_Price", "Product"],
        )
    }
}

impl ReportSink for CsvReportWriter {
    type Output = PathBuf;
    type Error = ReportWriteError;

    fn write(&mut self, tag: &str, artifact: ReportArtifact<'_>) -> Result<PathBuf, ReportWriteError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| ReportWriteError::Io {
            path: self.output_dir.clone(),
            source,
        })?;

        let path = self.output_dir.join(format!("{}_{tag}.csv", artifact.kind()));
        match artifact {
            ReportArtifact::FullInventory(rows) | ReportArtifact::CriticalItems(rows) => {
                Self::write_classified(&path, rows)?
            }
            ReportArtifact::RestockOrder(plan) => Self::write_restock(&path, plan)?,
            ReportArtifact::CategorySummary(summary) => Self::write_categories(&path, summary)?,
        }

        tracing::info!(artifact = %artifact.kind(), path = %path.display(), "report written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dromed_inventory::{InventoryRecord, ReportAssembler, RestockPolicy, Snapshot, StockThresholds};

    fn record(product: &str, category: &str, stock: u32, usage: f64, reorder_point: u32, price: f64) -> InventoryRecord {
        InventoryRecord {
            product: product.to_string(),
            category: category.to_string(),
            current_stock: stock,
            avg_daily_usage: usage,
            reorder_point,
            unit_price: price,
            last_restock_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            supplier: "Cardinal Health".to_string(),
            storage_location: "Zone-A1".to_string(),
        }
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn writes_every_non_empty_artifact() {
        let snapshot = Snapshot::new(vec![
            record("Aspirin 325mg", "Medications", 50, 10.0, 140, 5.0),
            record("Stethoscopes", "Medical Devices", 20, 0.0, 10, 80.0),
        ])
        .unwrap();
        let bundle = ReportAssembler::default().assemble(&snapshot);

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reports");
        let mut writer = CsvReportWriter::new(&out);
        let paths = bundle.publish("20240301_0930", &mut writer).unwrap();

        assert_eq!(paths.len(), 4);
        assert_eq!(
            file_names(&out),
            vec![
                "category_summary_20240301_0930.csv",
                "critical_items_20240301_0930.csv",
                "full_inventory_20240301_0930.csv",
                "restock_order_20240301_0930.csv",
            ]
        );

        let full = std::fs::read_to_string(out.join("full_inventory_20240301_0930.csv")).unwrap();
        let lines: Vec<_> = full.lines().collect();
        assert!(lines[0].ends_with("Remaining_Days,Status"));
        assert!(lines[1].starts_with("Aspirin 325mg,Medications,50,"));
        assert!(lines[1].ends_with(",5.0,Critical"));
        // No usage data: empty Remaining_Days cell.
        assert!(lines[2].ends_with(",,OK"));

        let restock = std::fs::read_to_string(out.join("restock_order_20240301_0930.csv")).unwrap();
        assert_eq!(
            restock.lines().nth(1).unwrap(),
            "Aspirin 325mg,Medications,50,140,230,5.0,1150.0,Cardinal Health,"
        );

        let categories = std::fs::read_to_string(out.join("category_summary_20240301_0930.csv")).unwrap();
        assert_eq!(
            categories.lines().collect::<Vec<_>>(),
            vec![
                "Category,Current_Stock,Unit_Price,Product",
                "Medical Devices,20,80.0,1",
                "Medications,50,5.0,1",
            ]
        );
    }

    #[test]
    fn clamped_line_carries_anomaly_text() {
        let snapshot = Snapshot::new(vec![record("Splints", "Emergency Supplies", 25, 1.0, 40, 9.0)]).unwrap();
        let bundle = ReportAssembler::new(StockThresholds::default(), RestockPolicy::new(0)).assemble(&snapshot);

        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvReportWriter::new(dir.path());
        bundle.publish("t", &mut writer).unwrap();

        let restock = std::fs::read_to_string(dir.path().join("restock_order_t.csv")).unwrap();
        assert!(restock.lines().nth(1).unwrap().contains("clamped to 0"));
    }

    #[test]
    fn empty_snapshot_writes_headers_only() {
        let bundle = ReportAssembler::default().assemble(&Snapshot::empty());
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvReportWriter::new(dir.path());
        bundle.publish("empty", &mut writer).unwrap();

        assert_eq!(
            file_names(dir.path()),
            vec!["category_summary_empty.csv", "full_inventory_empty.csv"]
        );
        let summary = std::fs::read_to_string(dir.path().join("category_summary_empty.csv")).unwrap();
        assert_eq!(summary.trim_end(), "Category,Current_Stock,Unit_Price,Product");
    }
}
