//! Score thresholds shared by console grading, report classification and exit signaling.

use serde::{Deserialize, Serialize};

/// Composite score at or above which a case counts as passed.
pub const PASS_THRESHOLD: f64 = 0.8;

/// Lower bound of the "partial" band, both per case and for the run pass rate.
pub const PARTIAL_THRESHOLD: f64 = 0.5;

pub fn is_passing(score: f64) -> bool {
    score >= PASS_THRESHOLD
}

/// Grade of a single case, used for progress lines only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseGrade {
    Pass,
    Partial,
    Fail,
}

impl CaseGrade {
    pub fn from_score(score: f64) -> Self {
        if score >= PASS_THRESHOLD {
            Self::Pass
        } else if score >= PARTIAL_THRESHOLD {
            Self::Partial
        } else {
            Self::Fail
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Partial => "PARTIAL",
            Self::Fail => "FAIL",
        }
    }
}

/// Classification of a whole run by its global pass rate.
///
/// An empty run has no pass rate and gets its own variant instead of a
/// defaulted rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunVerdict {
    Pass,
    Partial,
    Fail,
    Empty,
}

impl RunVerdict {
    pub fn from_pass_rate(pass_rate: Option<f64>) -> Self {
        match pass_rate {
            None => Self::Empty,
            Some(rate) if rate >= PASS_THRESHOLD => Self::Pass,
            Some(rate) if rate >= PARTIAL_THRESHOLD => Self::Partial,
            Some(_) => Self::Fail,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Partial => "partial",
            Self::Fail => "fail",
            Self::Empty => "empty",
        }
    }
}
