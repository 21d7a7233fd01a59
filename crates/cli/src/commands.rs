//! `analyze` and `generate` command implementations.
//!
//! Commands write their human-readable output to any `io::Write` so they can be
//! exercised without a terminal.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use dromed_infra::mock_data::generate_mock_inventory;
use dromed_infra::{CsvReportWriter, load_snapshot_file, write_snapshot_csv};
use dromed_inventory::{ReportAssembler, RestockPolicy, StockThresholds, summarize_categories};

use crate::format;

#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub data_file: PathBuf,
    pub reports_dir: PathBuf,
    pub thresholds: StockThresholds,
    /// Report tag; `None` skips saving.
    pub save_tag: Option<String>,
}

/// Load, analyse, print, and optionally save reports. Returns the written paths.
pub fn analyze<W: Write>(opts: &AnalyzeOptions, out: &mut W) -> anyhow::Result<Vec<PathBuf>> {
    let snapshot = load_snapshot_file(&opts.data_file)
        .with_context(|| format!("could not load inventory from {}", opts.data_file.display()))?;

    let bundle = ReportAssembler::new(opts.thresholds, RestockPolicy::default()).assemble(&snapshot);

    writeln!(out, "{}", format::render_status_summary(&bundle.status_summary()))?;

    if !bundle.critical_items().is_empty() {
        writeln!(out, "{}", format::render_critical_items(bundle.critical_items()))?;
    }

    if !bundle.restock_order().is_empty() {
        writeln!(out, "{}", format::render_restock_plan(bundle.restock_order()))?;
    }

    let Some(tag) = opts.save_tag.as_deref() else {
        return Ok(Vec::new());
    };

    let mut writer = CsvReportWriter::new(&opts.reports_dir);
    let written = bundle
        .publish(tag, &mut writer)
        .with_context(|| format!("could not save reports to {}", opts.reports_dir.display()))?;
    writeln!(out, "Reports saved in {} directory", opts.reports_dir.display())?;
    Ok(written)
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub records: usize,
    pub output: PathBuf,
    pub seed: Option<u64>,
    pub today: NaiveDate,
}

/// Write a mock inventory sheet and print per-category counts.
pub fn generate<W: Write>(opts: &GenerateOptions, out: &mut W) -> anyhow::Result<usize> {
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let records = generate_mock_inventory(opts.records, opts.today, &mut rng);

    if let Some(parent) = opts.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("could not create {}", parent.display()))?;
    }
    let file = std::fs::File::create(&opts.output)
        .with_context(|| format!("could not create {}", opts.output.display()))?;
    write_snapshot_csv(&records, file)
        .with_context(|| format!("could not write {}", opts.output.display()))?;

    tracing::info!(records = records.len(), path = %opts.output.display(), "mock inventory written");
    writeln!(out, "Mock medical inventory data saved to {}", opts.output.display())?;
    writeln!(out, "\nDataset Statistics:")?;
    for (category, stats) in summarize_categories(&records).iter() {
        writeln!(out, "{category:<20} {}", stats.product_count)?;
    }

    Ok(records.len())
}
