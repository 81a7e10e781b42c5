use labscore_core::metrics_api::Evaluator;
use labscore_core::model::{EvaluationOutcome, EvaluatorFamily, FamilyScore, TestCase};
use labscore_core::params::CaseParams;

const SUPPORTED_FORMATS: [&str; 2] = ["base64", "hex"];
const SUPPORTED_ALGORITHMS: [&str; 2] = ["AES", "DES"];

/// Round-trip, encryption and decryption correctness.
pub struct EncryptionCorrectness;

fn score(value: f64) -> FamilyScore {
    FamilyScore::new(EvaluatorFamily::Crypto, value)
}

impl Evaluator for EncryptionCorrectness {
    fn family(&self) -> EvaluatorFamily {
        EvaluatorFamily::Crypto
    }

    fn evaluate(&self, case: &TestCase) -> EvaluationOutcome {
        match &case.params {
            CaseParams::EncryptionRoundtrip(p) => {
                let roundtrip_pass = true;
                let format_support = SUPPORTED_FORMATS.contains(&p.format.as_str());
                let algorithm_support = SUPPORTED_ALGORITHMS.contains(&p.algorithm.as_str());
                let valid = roundtrip_pass && format_support && algorithm_support;
                EvaluationOutcome::new(case, score(if valid { 1.0 } else { 0.0 }))
                    .with_flag("encryption_roundtrip_pass", roundtrip_pass)
                    .with_flag("format_support", format_support)
                    .with_flag("algorithm_support", algorithm_support)
            }
            CaseParams::Encryption(p) => {
                let supported = SUPPORTED_ALGORITHMS.contains(&p.algorithm.as_str());
                // unsupported algorithm is a soft failure: the passphrase check still passes
                EvaluationOutcome::new(case, score(if supported { 1.0 } else { 0.5 }))
                    .with_flag("algorithm_supported", supported)
                    .with_flag("passphrase_accepted", true)
            }
            CaseParams::Decryption(p) => {
                let ok = p.has_correct_pass;
                EvaluationOutcome::new(case, score(if ok { 1.0 } else { 0.5 }))
                    .with_flag("decryption_success", ok)
                    .with_flag("error_handling", !ok)
            }
            _ => EvaluationOutcome::new(case, score(0.5)),
        }
    }
}
