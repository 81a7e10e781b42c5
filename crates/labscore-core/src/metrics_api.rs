use std::sync::Arc;

use crate::errors::EvaluatorSetError;
use crate::model::{EvaluationOutcome, EvaluatorFamily, TestCase};

/// A stateless scoring function for one evaluator family.
///
/// Implementations never fail: unrecognized parameters degrade to a
/// documented default score.
pub trait Evaluator: Send + Sync {
    fn family(&self) -> EvaluatorFamily;

    fn name(&self) -> &'static str {
        self.family().display_name()
    }

    fn evaluate(&self, case: &TestCase) -> EvaluationOutcome;
}

/// One evaluator per family, handed to the engine explicitly.
#[derive(Clone)]
pub struct EvaluatorSet {
    crypto: Arc<dyn Evaluator>,
    media: Arc<dyn Evaluator>,
    functional: Arc<dyn Evaluator>,
}

impl EvaluatorSet {
    /// Each evaluator must report the family of the slot it is given.
    pub fn new(
        crypto: Arc<dyn Evaluator>,
        media: Arc<dyn Evaluator>,
        functional: Arc<dyn Evaluator>,
    ) -> Result<Self, EvaluatorSetError> {
        for (expected, evaluator) in [
            (EvaluatorFamily::Crypto, &crypto),
            (EvaluatorFamily::Media, &media),
            (EvaluatorFamily::Functional, &functional),
        ] {
            let found = evaluator.family();
            if found != expected {
                return Err(EvaluatorSetError::FamilyMismatch {
                    name: evaluator.name(),
                    expected,
                    found,
                });
            }
        }
        Ok(Self {
            crypto,
            media,
            functional,
        })
    }

    pub fn get(&self, family: EvaluatorFamily) -> &dyn Evaluator {
        match family {
            EvaluatorFamily::Crypto => self.crypto.as_ref(),
            EvaluatorFamily::Media => self.media.as_ref(),
            EvaluatorFamily::Functional => self.functional.as_ref(),
        }
    }

    /// Evaluator names in fixed family order.
    pub fn names(&self) -> Vec<String> {
        EvaluatorFamily::ALL
            .iter()
            .map(|f| self.get(*f).name().to_string())
            .collect()
    }
}

impl std::fmt::Debug for EvaluatorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
