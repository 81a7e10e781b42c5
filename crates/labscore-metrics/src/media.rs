use labscore_core::metrics_api::Evaluator;
use labscore_core::model::{EvaluationOutcome, EvaluatorFamily, FamilyScore, TestCase};
use labscore_core::params::{CaseParams, ConversionParams, ResizeOp, ResizeParams};

const SUPPORTED_IMAGE_FORMATS: [&str; 6] = ["png", "jpeg", "jpg", "webp", "gif", "bmp"];

/// Source formats may use this to mean "whatever the user picked".
const ANY_SOURCE: &str = "any";

/// Conversion and resize quality.
pub struct ImageProcessingQuality;

fn score(value: f64) -> FamilyScore {
    FamilyScore::new(EvaluatorFamily::Media, value)
}

fn is_supported(format: &str) -> bool {
    let lower = format.to_lowercase();
    SUPPORTED_IMAGE_FORMATS.contains(&lower.as_str())
}

fn truthy(dim: Option<u32>) -> bool {
    dim.is_some_and(|d| d != 0)
}

fn conversion(case: &TestCase, p: &ConversionParams) -> EvaluationOutcome {
    let source_ok = is_supported(&p.source_format) || p.source_format == ANY_SOURCE;
    let target_ok = is_supported(&p.target_format);
    let possible = source_ok && target_ok;
    EvaluationOutcome::new(case, score(if possible { 1.0 } else { 0.0 }))
        .with_flag("source_format_supported", source_ok)
        .with_flag("target_format_supported", target_ok)
        .with_flag("conversion_possible", possible)
}

fn resize(case: &TestCase, p: &ResizeParams) -> EvaluationOutcome {
    let outcome = EvaluationOutcome::new(case, score(0.0))
        .with_resize_operation(p.operation.as_str())
        .with_flag("width_provided", p.width.is_some())
        .with_flag("height_provided", p.height.is_some());

    let (aspect_preserved, value) = match p.operation {
        ResizeOp::Width if truthy(p.width) => (true, 1.0),
        ResizeOp::Height if truthy(p.height) => (true, 1.0),
        // forcing both dimensions breaks the aspect ratio
        ResizeOp::WidthHeight if truthy(p.width) && truthy(p.height) => (false, 0.9),
        ref op => {
            tracing::debug!(
                test_id = %case.test_id,
                operation = op.as_str(),
                "resize operation missing its dimension or unrecognized"
            );
            return outcome;
        }
    };

    EvaluationOutcome {
        score: score(value),
        ..outcome.with_flag("aspect_ratio_preserved", aspect_preserved)
    }
}

impl Evaluator for ImageProcessingQuality {
    fn family(&self) -> EvaluatorFamily {
        EvaluatorFamily::Media
    }

    fn evaluate(&self, case: &TestCase) -> EvaluationOutcome {
        match &case.params {
            CaseParams::ImageConversion(p) => conversion(case, p),
            CaseParams::ImageResize(p) => resize(case, p),
            _ => EvaluationOutcome::new(case, score(0.5)),
        }
    }
}
