use std::collections::BTreeMap;

use crate::dataset::{Dataset, RejectedRecord};
use crate::metrics_api::EvaluatorSet;
use crate::model::{CaseResult, CaseStatus, EvaluationOutcome, TestCase};
use crate::report::aggregate::{aggregate_scores, metrics_by_type};
use crate::report::EvaluationReport;
use crate::thresholds::RunVerdict;

/// Stands in for an identifier or tag a rejected record did not carry.
const UNKNOWN_FIELD: &str = "unknown";

/// Routes test cases to evaluators and builds the run report.
#[derive(Debug, Clone)]
pub struct Engine {
    evaluators: EvaluatorSet,
}

impl Engine {
    pub fn new(evaluators: EvaluatorSet) -> Self {
        Self { evaluators }
    }

    pub fn evaluators(&self) -> &EvaluatorSet {
        &self.evaluators
    }

    pub fn evaluate_test_case(&self, case: &TestCase) -> CaseResult {
        let mut evaluations = BTreeMap::new();
        if let Some(family) = case.category.family() {
            let outcome = self.evaluators.get(family).evaluate(case);
            evaluations.insert(family.key(), outcome);
        }

        let scores: Vec<f64> = evaluations.values().map(EvaluationOutcome::score).collect();
        let (overall_score, status) = if scores.is_empty() {
            (0.0, CaseStatus::NotApplicable)
        } else {
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            (mean, CaseStatus::Scored)
        };

        tracing::debug!(
            test_id = %case.test_id,
            test_type = %case.test_type,
            overall_score,
            "evaluated test case"
        );

        CaseResult {
            test_id: case.test_id.clone(),
            test_type: case.test_type.clone(),
            evaluations,
            overall_score,
            status,
        }
    }

    /// Evaluates every case in input order and aggregates the results.
    pub fn run(&self, cases: &[TestCase]) -> EvaluationReport {
        self.run_with_rejected(cases, &[])
    }

    /// Scores a loaded dataset. Records rejected at load time count as
    /// 0.0 cases with status `rejected`, in their original position.
    pub fn run_dataset(&self, dataset: &Dataset) -> EvaluationReport {
        self.run_with_rejected(&dataset.cases, &dataset.rejected)
            .with_rejected(dataset.rejected.clone())
    }

    fn run_with_rejected(
        &self,
        cases: &[TestCase],
        rejected: &[RejectedRecord],
    ) -> EvaluationReport {
        let total = cases.len() + rejected.len();
        let mut overall_results = Vec::with_capacity(total);
        let mut cases = cases.iter().peekable();
        let mut rejected = rejected.iter().peekable();

        for position in 0..total {
            let take_rejected = match (cases.peek(), rejected.peek()) {
                (_, Some(r)) if r.position <= position => true,
                (None, Some(_)) => true,
                _ => false,
            };
            let result = if take_rejected {
                rejected.next().map(rejected_result)
            } else {
                cases.next().map(|c| self.evaluate_test_case(c))
            };
            overall_results.extend(result);
        }

        let by_type = metrics_by_type(&overall_results);
        let aggregate = aggregate_scores(&overall_results, self.evaluators.names());
        let verdict = RunVerdict::from_pass_rate(aggregate.overall_pass_rate);

        tracing::info!(
            total = aggregate.total_tests,
            verdict = verdict.as_str(),
            "evaluation run complete"
        );

        EvaluationReport::new(overall_results, by_type, aggregate, verdict)
    }
}

fn rejected_result(record: &RejectedRecord) -> CaseResult {
    CaseResult {
        test_id: record
            .test_id
            .clone()
            .unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
        test_type: record
            .test_type
            .clone()
            .unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
        evaluations: BTreeMap::new(),
        overall_score: 0.0,
        status: CaseStatus::Rejected,
    }
}
