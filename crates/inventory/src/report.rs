//! Report assembly: one analysis pass over a snapshot, packaged as named artifacts.
//!
//! The assembler produces data only. Naming, serialization and storage belong to
//! a [`ReportSink`] supplied by the caller together with an opaque tag
//! (timestamp, version label, ...).

use serde::Serialize;

use crate::category::{CategorySummary, summarize_categories};
use crate::classifier::{ClassifiedRecord, StatusSummary, StockClassification, StockThresholds, classify};
use crate::record::Snapshot;
use crate::restock::{RestockPlan, RestockPolicy, plan_restock};

/// Name of a report artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    FullInventory,
    CriticalItems,
    RestockOrder,
    CategorySummary,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::FullInventory => "full_inventory",
            ArtifactKind::CriticalItems => "critical_items",
            ArtifactKind::RestockOrder => "restock_order",
            ArtifactKind::CategorySummary => "category_summary",
        }
    }
}

impl core::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view of one artifact, handed to a sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportArtifact<'a> {
    FullInventory(&'a [ClassifiedRecord]),
    CriticalItems(&'a [ClassifiedRecord]),
    RestockOrder(&'a RestockPlan),
    CategorySummary(&'a CategorySummary),
}

impl ReportArtifact<'_> {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            ReportArtifact::FullInventory(_) => ArtifactKind::FullInventory,
            ReportArtifact::CriticalItems(_) => ArtifactKind::CriticalItems,
            ReportArtifact::RestockOrder(_) => ArtifactKind::RestockOrder,
            ReportArtifact::CategorySummary(_) => ArtifactKind::CategorySummary,
        }
    }
}

/// Persistence/export collaborator for report artifacts.
pub trait ReportSink {
    /// Whatever the sink wants to report back per artifact (a path, a byte count, ...).
    type Output;
    type Error;

    fn write(&mut self, tag: &str, artifact: ReportArtifact<'_>) -> Result<Self::Output, Self::Error>;
}

/// All outputs of one analysis pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportBundle {
    classification: StockClassification,
    restock_order: RestockPlan,
    category_summary: CategorySummary,
}

impl ReportBundle {
    pub fn full_inventory(&self) -> &[ClassifiedRecord] {
        self.classification.records()
    }

    pub fn critical_items(&self) -> &[ClassifiedRecord] {
        self.classification.critical()
    }

    pub fn classification(&self) -> &StockClassification {
        &self.classification
    }

    pub fn restock_order(&self) -> &RestockPlan {
        &self.restock_order
    }

    pub fn category_summary(&self) -> &CategorySummary {
        &self.category_summary
    }

    pub fn status_summary(&self) -> StatusSummary {
        self.classification.summary()
    }

    /// Artifacts worth persisting, in a fixed order.
    ///
    /// `full_inventory` and `category_summary` are always present; the critical
    /// items and restock order are skipped when empty.
    pub fn artifacts(&self) -> Vec<ReportArtifact<'_>> {
        let mut out = vec![ReportArtifact::FullInventory(self.full_inventory())];
        if !self.critical_items().is_empty() {
            out.push(ReportArtifact::CriticalItems(self.critical_items()));
        }
        if !self.restock_order.is_empty() {
            out.push(ReportArtifact::RestockOrder(&self.restock_order));
        }
        out.push(ReportArtifact::CategorySummary(&self.category_summary));
        out
    }

    /// Hand every artifact to `sink` under `tag`, stopping at the first error.
    pub fn publish<S: ReportSink>(&self, tag: &str, sink: &mut S) -> Result<Vec<S::Output>, S::Error> {
        self.artifacts()
            .into_iter()
            .map(|artifact| sink.write(tag, artifact))
            .collect()
    }
}

/// Runs the classifier, planner and aggregator over one snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReportAssembler {
    thresholds: StockThresholds,
    policy: RestockPolicy,
}

impl ReportAssembler {
    pub fn new(thresholds: StockThresholds, policy: RestockPolicy) -> Self {
        Self { thresholds, policy }
    }

    pub fn thresholds(&self) -> &StockThresholds {
        &self.thresholds
    }

    pub fn policy(&self) -> &RestockPolicy {
        &self.policy
    }

    pub fn assemble(&self, snapshot: &Snapshot) -> ReportBundle {
        let classification = classify(snapshot.records(), &self.thresholds);
        let restock_order = plan_restock(classification.records(), &self.policy);
        let category_summary = summarize_categories(snapshot.records());

        let summary = classification.summary();
        tracing::debug!(
            records = snapshot.len(),
            critical = summary.critical,
            warning = summary.warning,
            ok = summary.ok,
            restock_lines = restock_order.len(),
            categories = category_summary.len(),
            "assembled inventory report"
        );

        ReportBundle {
            classification,
            restock_order,
            category_summary,
        }
    }
}
