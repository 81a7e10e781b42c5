pub mod dataset;
pub mod engine;
pub mod errors;
pub mod metrics_api;
pub mod model;
pub mod params;
pub mod report;
pub mod thresholds;

pub use engine::Engine;
pub use metrics_api::{Evaluator, EvaluatorSet};
pub use model::{CaseResult, Category, EvaluationOutcome, EvaluatorFamily, TestCase};
pub use report::EvaluationReport;
