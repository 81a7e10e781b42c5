use std::sync::Arc;

use labscore_core::errors::EvaluatorSetError;
use labscore_core::metrics_api::EvaluatorSet;

mod crypto;
mod functional;
mod media;

pub use crypto::EncryptionCorrectness;
pub use functional::FunctionalCompleteness;
pub use media::ImageProcessingQuality;

pub fn default_evaluators() -> Result<EvaluatorSet, EvaluatorSetError> {
    EvaluatorSet::new(
        Arc::new(EncryptionCorrectness),
        Arc::new(ImageProcessingQuality),
        Arc::new(FunctionalCompleteness),
    )
}
