//! Grouped and global statistics over per-case composite scores.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::CaseResult;
use crate::thresholds::is_passing;

/// Statistics for one observed category. Only built for non-empty groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeMetrics {
    pub count: usize,
    pub average_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub pass_rate: f64,
}

/// Statistics over every case in the run. Score fields are `None` for an empty run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateScores {
    pub total_tests: usize,
    pub overall_average: Option<f64>,
    pub overall_pass_rate: Option<f64>,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    pub evaluators_used: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
struct ScoreStats {
    count: usize,
    sum: f64,
    min: f64,
    max: f64,
    passed: usize,
}

impl ScoreStats {
    fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            passed: 0,
        }
    }

    fn push(&mut self, score: f64) {
        self.count += 1;
        self.sum += score;
        self.min = self.min.min(score);
        self.max = self.max.max(score);
        if is_passing(score) {
            self.passed += 1;
        }
    }

    fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    fn pass_rate(&self) -> Option<f64> {
        (self.count > 0).then(|| self.passed as f64 / self.count as f64)
    }

    fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }
}

/// Fraction of scores at or above the pass threshold, `None` for no scores.
pub fn pass_rate(scores: &[f64]) -> Option<f64> {
    let mut stats = ScoreStats::new();
    scores.iter().for_each(|s| stats.push(*s));
    stats.pass_rate()
}

pub fn metrics_by_type(results: &[CaseResult]) -> BTreeMap<String, TypeMetrics> {
    let mut groups: BTreeMap<String, ScoreStats> = BTreeMap::new();
    for r in results {
        groups
            .entry(r.test_type.clone())
            .or_insert_with(ScoreStats::new)
            .push(r.overall_score);
    }

    groups
        .into_iter()
        .filter_map(|(test_type, stats)| {
            Some((
                test_type,
                TypeMetrics {
                    count: stats.count,
                    average_score: stats.average()?,
                    min_score: stats.min()?,
                    max_score: stats.max()?,
                    pass_rate: stats.pass_rate()?,
                },
            ))
        })
        .collect()
}

/// Global statistics. The pass rate counts passing cases over all cases; it is
/// not the mean of per-type pass rates.
pub fn aggregate_scores(results: &[CaseResult], evaluators_used: Vec<String>) -> AggregateScores {
    let mut stats = ScoreStats::new();
    for r in results {
        stats.push(r.overall_score);
    }
    AggregateScores {
        total_tests: stats.count,
        overall_average: stats.average(),
        overall_pass_rate: stats.pass_rate(),
        min_score: stats.min(),
        max_score: stats.max(),
        evaluators_used,
    }
}
