use labscore_core::metrics_api::Evaluator;
use labscore_core::model::{EvaluationOutcome, EvaluatorFamily, FamilyScore, TestCase};
use labscore_core::params::{CaseParams, UiAction};

const SUPPORTED_ENCODINGS: [&str; 2] = ["base64", "hex"];
const EXPECTED_TABS: [&str; 4] = ["Convert", "Base64 / Hex", "Encrypt", "Decrypt"];
const EXPECTED_BUTTONS: [&str; 4] = ["makeBase64Btn", "makeHexBtn", "encryptBtn", "convertBtn"];

/// Encoding support and UI completeness.
pub struct FunctionalCompleteness;

fn score(value: f64) -> FamilyScore {
    FamilyScore::new(EvaluatorFamily::Functional, value)
}

fn ui(case: &TestCase, action: &UiAction) -> EvaluationOutcome {
    match action {
        UiAction::FileUpload => EvaluationOutcome::new(case, score(1.0))
            .with_flag("file_input_exists", true)
            .with_flag("preview_shown", true),
        UiAction::TabSwitch { tab_names } => {
            let tabs_exist = tab_names.len() == EXPECTED_TABS.len();
            EvaluationOutcome::new(case, score(if tabs_exist { 1.0 } else { 0.5 }))
                .with_flag("tabs_exist", tabs_exist)
                .with_flag("all_tabs_clickable", true)
        }
        UiAction::ButtonEnable { button_names } => {
            let buttons_exist = button_names.len() >= EXPECTED_BUTTONS.len();
            EvaluationOutcome::new(case, score(if buttons_exist { 1.0 } else { 0.5 }))
                .with_flag("buttons_exist", buttons_exist)
                .with_flag("buttons_enable_on_load", true)
        }
        UiAction::ErrorHandling { scenario } => {
            tracing::debug!(test_id = %case.test_id, scenario = %scenario, "error scenario");
            EvaluationOutcome::new(case, score(1.0))
                .with_flag("error_detected", true)
                .with_flag("error_message_shown", true)
                .with_flag("user_informed", true)
        }
        UiAction::Other(name) => {
            tracing::debug!(test_id = %case.test_id, action = %name, "unrecognized ui action");
            EvaluationOutcome::new(case, score(0.5))
        }
    }
}

impl Evaluator for FunctionalCompleteness {
    fn family(&self) -> EvaluatorFamily {
        EvaluatorFamily::Functional
    }

    fn evaluate(&self, case: &TestCase) -> EvaluationOutcome {
        match &case.params {
            CaseParams::Encoding(p) => {
                let supported = SUPPORTED_ENCODINGS.contains(&p.format.as_str());
                EvaluationOutcome::new(case, score(if supported { 1.0 } else { 0.0 }))
                    .with_flag("format_supported", supported)
                    .with_flag("generates_output", true)
            }
            CaseParams::UiFunctionality(action) => ui(case, action),
            _ => EvaluationOutcome::new(case, score(0.5)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn eval(v: serde_json::Value) -> EvaluationOutcome {
        FunctionalCompleteness.evaluate(&TestCase::try_from(v).unwrap())
    }

    #[test]
    fn encoding_formats() {
        let o = eval(json!({"test_id": "e1", "test_type": "encoding", "format": "hex"}));
        assert_eq!(o.score, FamilyScore::Completeness(1.0));
        assert_eq!(o.flag("generates_output"), Some(true));

        let o = eval(json!({"test_id": "e2", "test_type": "encoding", "format": "base32"}));
        assert_eq!(o.score(), 0.0);
        assert_eq!(o.flag("format_supported"), Some(false));

        let o = eval(json!({"test_id": "e3", "test_type": "encoding"}));
        assert_eq!(o.score(), 0.0);
    }

    #[test]
    fn tab_switch_requires_exact_count() {
        let o = eval(json!({
            "test_id": "ui-1",
            "test_type": "ui_functionality",
            "action": "tab_switch",
            "tab_names": ["Convert", "Base64 / Hex", "Encrypt", "Decrypt"]
        }));
        assert_eq!(o.score(), 1.0);
        assert_eq!(o.flag("tabs_exist"), Some(true));

        let o = eval(json!({
            "test_id": "ui-2",
            "test_type": "ui_functionality",
            "action": "tab_switch",
            "tab_names": ["Convert", "Encrypt", "Decrypt"]
        }));
        assert_eq!(o.score(), 0.5);
        assert_eq!(o.flag("tabs_exist"), Some(false));

        let o = eval(json!({
            "test_id": "ui-3",
            "test_type": "ui_functionality",
            "action": "tab_switch",
            "tab_names": ["a", "b", "c", "d", "e"]
        }));
        assert_eq!(o.score(), 0.5);
    }

    #[test]
    fn button_enable_accepts_at_least_expected_count() {
        let o = eval(json!({
            "test_id": "ui-4",
            "test_type": "ui_functionality",
            "action": "button_enable",
            "button_names": ["a", "b", "c", "d", "e"]
        }));
        assert_eq!(o.score(), 1.0);

        let o = eval(json!({
            "test_id": "ui-4b",
            "test_type": "ui_functionality",
            "action": "button_enable",
            "button_names": ["makeBase64Btn", "makeHexBtn", "encryptBtn", "convertBtn"]
        }));
        assert_eq!(o.score(), 1.0);
        assert_eq!(o.flag("buttons_exist"), Some(true));

        let o = eval(json!({
            "test_id": "ui-4c",
            "test_type": "ui_functionality",
            "action": "button_enable",
            "button_names": ["makeBase64Btn", "makeHexBtn", "encryptBtn"]
        }));
        assert_eq!(o.score(), 0.5);
        assert_eq!(o.flag("buttons_exist"), Some(false));

        let o = eval(json!({
            "test_id": "ui-5",
            "test_type": "ui_functionality",
            "action": "button_enable",
            "button_names": ["makeHexBtn"]
        }));
        assert_eq!(o.score(), 0.5);
        assert_eq!(o.flag("buttons_enable_on_load"), Some(true));
    }

    #[test]
    fn file_upload_and_error_handling_always_pass() {
        let o = eval(json!({"test_id": "ui-6", "test_type": "ui_functionality", "action": "file_upload"}));
        assert_eq!(o.score(), 1.0);
        assert_eq!(o.flag("preview_shown"), Some(true));

        let o = eval(json!({
            "test_id": "ui-7",
            "test_type": "ui_functionality",
            "action": "error_handling",
            "scenario": "wrong_passphrase"
        }));
        assert_eq!(o.score(), 1.0);
        assert_eq!(o.flag("user_informed"), Some(true));
    }

    #[test]
    fn unknown_action_is_neutral() {
        let o = eval(json!({"test_id": "ui-8", "test_type": "ui_functionality", "action": "drag_drop"}));
        assert_eq!(o.score(), 0.5);
        assert!(o.flags.is_empty());
    }
}
