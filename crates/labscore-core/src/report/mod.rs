pub mod aggregate;
pub mod console;
pub mod json;

use serde::Serialize;
use std::collections::BTreeMap;

use crate::dataset::{Dataset, RejectedRecord};
use crate::model::CaseResult;
use crate::thresholds::RunVerdict;
use aggregate::{AggregateScores, TypeMetrics};

/// Current schema version for the evaluation report.
pub const SCHEMA_VERSION: u32 = 1;

/// Where a report came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Provenance {
    pub labscore_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_path: Option<String>,
    /// `sha256:<hex>` of the dataset bytes; absent when the file could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_digest: Option<String>,
}

impl Provenance {
    pub fn new(labscore_version: &str) -> Self {
        Self {
            labscore_version: labscore_version.to_string(),
            dataset_path: None,
            dataset_digest: None,
        }
    }

    pub fn with_dataset(mut self, dataset: &Dataset) -> Self {
        self.dataset_path = Some(dataset.path.display().to_string());
        self.dataset_digest = dataset.digest.clone();
        self
    }
}

/// The full output of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub schema_version: u32,
    pub provenance: Provenance,
    pub overall_results: Vec<CaseResult>,
    pub metrics_by_type: BTreeMap<String, TypeMetrics>,
    pub aggregate_scores: AggregateScores,
    pub verdict: RunVerdict,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected_records: Vec<RejectedRecord>,
}

impl EvaluationReport {
    pub fn new(
        overall_results: Vec<CaseResult>,
        metrics_by_type: BTreeMap<String, TypeMetrics>,
        aggregate_scores: AggregateScores,
        verdict: RunVerdict,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            provenance: Provenance::default(),
            overall_results,
            metrics_by_type,
            aggregate_scores,
            verdict,
            rejected_records: Vec::new(),
        }
    }

    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    /// Attach records that failed validation. They do not affect scores or verdict.
    pub fn with_rejected(mut self, rejected: Vec<RejectedRecord>) -> Self {
        self.rejected_records = rejected;
        self
    }
}
