//! Human-readable progress and summary, written to stderr.

use crate::model::{CaseResult, CaseStatus};
use crate::report::EvaluationReport;
use crate::thresholds::CaseGrade;

const RULE_WIDTH: usize = 70;

fn percent(v: f64) -> String {
    format!("{:.2}%", v * 100.0)
}

fn opt_percent(v: Option<f64>) -> String {
    v.map(percent).unwrap_or_else(|| "n/a".into())
}

fn opt_score(v: Option<f64>) -> String {
    v.map(|s| format!("{:.2}", s)).unwrap_or_else(|| "n/a".into())
}

/// One progress line; `index` is 1-based.
#[must_use]
pub fn format_case_line(index: usize, result: &CaseResult) -> String {
    let label = match result.status {
        CaseStatus::Rejected => "REJECTED",
        _ => CaseGrade::from_score(result.overall_score).label(),
    };
    format!(
        "  {:2}. [{}] {:25} {} (Score: {:.2})",
        index, result.test_id, result.test_type, label, result.overall_score
    )
}

pub fn print_case_lines(results: &[CaseResult]) {
    for (i, r) in results.iter().enumerate() {
        eprintln!("{}", format_case_line(i + 1, r));
    }
}

#[must_use]
pub fn format_summary(report: &EvaluationReport) -> String {
    let agg = &report.aggregate_scores;
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = Vec::new();

    out.push(rule.clone());
    out.push("EVALUATION SUMMARY".to_string());
    out.push(rule.clone());
    out.push("Overall Results:".to_string());
    out.push(format!("   Total Tests: {}", agg.total_tests));
    if agg.total_tests == 0 {
        out.push("   No test cases were evaluated.".to_string());
    } else {
        out.push(format!("   Average Score: {}", opt_percent(agg.overall_average)));
        out.push(format!(
            "   Pass Rate (>=80%): {}",
            opt_percent(agg.overall_pass_rate)
        ));
        out.push(format!(
            "   Score Range: {} - {}",
            opt_score(agg.min_score),
            opt_score(agg.max_score)
        ));
    }

    if !report.metrics_by_type.is_empty() {
        out.push(String::new());
        out.push("Metrics by Test Type:".to_string());
        for (test_type, m) in &report.metrics_by_type {
            out.push(format!("   {}:", test_type));
            out.push(format!("      Tests: {}", m.count));
            out.push(format!("      Avg Score: {}", percent(m.average_score)));
            out.push(format!("      Pass Rate: {}", percent(m.pass_rate)));
        }
    }

    if !report.rejected_records.is_empty() {
        out.push(String::new());
        out.push(format!(
            "Rejected Records: {}",
            report.rejected_records.len()
        ));
        for r in &report.rejected_records {
            out.push(format!("   line {}: {}", r.line, r.reason));
        }
    }

    out.push(String::new());
    out.push("Evaluators Used:".to_string());
    for name in &agg.evaluators_used {
        out.push(format!("   - {}", name));
    }
    out.push(format!("Verdict: {}", report.verdict.as_str()));
    out.push(rule);
    out.join("\n")
}

pub fn print_summary(report: &EvaluationReport) {
    eprintln!("{}", format_summary(report));
}
