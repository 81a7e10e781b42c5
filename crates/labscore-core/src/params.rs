//! Per-category parameter structures, validated when a record is read.
//!
//! Absent or `null` keys fall back to documented defaults. A key holding the
//! wrong JSON type is a [`RecordError::InvalidParam`].

use serde::Deserialize;

use crate::errors::RecordError;
use crate::model::{Category, CryptoCategory, FunctionalCategory, MediaCategory, RawRecord};

const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseParams {
    EncryptionRoundtrip(RoundtripParams),
    Encryption(EncryptionParams),
    Decryption(DecryptionParams),
    ImageConversion(ConversionParams),
    ImageResize(ResizeParams),
    Encoding(EncodingParams),
    UiFunctionality(UiAction),
    /// Category carries no parameters its evaluator looks at.
    Unclassified,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundtripParams {
    pub format: String,
    pub algorithm: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionParams {
    pub algorithm: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptionParams {
    pub has_correct_pass: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionParams {
    pub source_format: String,
    pub target_format: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeParams {
    pub operation: ResizeOp,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeOp {
    Width,
    Height,
    WidthHeight,
    Unknown(String),
}

impl ResizeOp {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "resize_w" => Self::Width,
            "resize_h" => Self::Height,
            "resize_wh" => Self::WidthHeight,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Width => "resize_w",
            Self::Height => "resize_h",
            Self::WidthHeight => "resize_wh",
            Self::Unknown(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingParams {
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    FileUpload,
    TabSwitch { tab_names: Vec<String> },
    ButtonEnable { button_names: Vec<String> },
    ErrorHandling { scenario: String },
    Other(String),
}

// Wire shapes: every key optional so that absent and null both mean "use the default".

#[derive(Deserialize)]
struct RoundtripWire {
    format: Option<String>,
    algorithm: Option<String>,
}

#[derive(Deserialize)]
struct EncryptionWire {
    algorithm: Option<String>,
}

#[derive(Deserialize)]
struct DecryptionWire {
    has_correct_pass: Option<bool>,
}

#[derive(Deserialize)]
struct ConversionWire {
    source_format: Option<String>,
    target_format: Option<String>,
}

#[derive(Deserialize)]
struct ResizeWire {
    operation: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Deserialize)]
struct EncodingWire {
    format: Option<String>,
}

#[derive(Deserialize)]
struct UiWire {
    action: Option<String>,
    tab_names: Option<Vec<String>>,
    button_names: Option<Vec<String>>,
    scenario: Option<String>,
}

fn decode<T: for<'de> Deserialize<'de>>(
    test_type: &str,
    fields: &RawRecord,
) -> Result<T, RecordError> {
    serde_json::from_value(serde_json::Value::Object(fields.clone()))
        .map_err(|e| RecordError::invalid_param(test_type, e))
}

fn or_unknown(v: Option<String>) -> String {
    v.unwrap_or_else(|| UNKNOWN.to_string())
}

impl CaseParams {
    /// Builds the parameter variant for `category` out of the record's fields.
    pub fn from_fields(
        category: &Category,
        test_type: &str,
        fields: &RawRecord,
    ) -> Result<Self, RecordError> {
        let params = match category {
            Category::Crypto(CryptoCategory::EncryptionRoundtrip) => {
                let w: RoundtripWire = decode(test_type, fields)?;
                Self::EncryptionRoundtrip(RoundtripParams {
                    format: w.format.unwrap_or_else(|| "base64".to_string()),
                    algorithm: w.algorithm.unwrap_or_else(|| "AES".to_string()),
                })
            }
            Category::Crypto(CryptoCategory::Encryption) => {
                let w: EncryptionWire = decode(test_type, fields)?;
                Self::Encryption(EncryptionParams {
                    algorithm: w.algorithm.unwrap_or_else(|| "AES".to_string()),
                })
            }
            Category::Crypto(CryptoCategory::Decryption) => {
                let w: DecryptionWire = decode(test_type, fields)?;
                Self::Decryption(DecryptionParams {
                    has_correct_pass: w.has_correct_pass.unwrap_or(true),
                })
            }
            Category::Media(MediaCategory::ImageConversion) => {
                let w: ConversionWire = decode(test_type, fields)?;
                Self::ImageConversion(ConversionParams {
                    source_format: or_unknown(w.source_format),
                    target_format: or_unknown(w.target_format),
                })
            }
            Category::Media(MediaCategory::ImageResize) => {
                let w: ResizeWire = decode(test_type, fields)?;
                Self::ImageResize(ResizeParams {
                    operation: ResizeOp::parse(w.operation.as_deref().unwrap_or(UNKNOWN)),
                    width: w.width,
                    height: w.height,
                })
            }
            Category::Functional(FunctionalCategory::Encoding) => {
                let w: EncodingWire = decode(test_type, fields)?;
                Self::Encoding(EncodingParams {
                    format: or_unknown(w.format),
                })
            }
            Category::Functional(FunctionalCategory::UiFunctionality) => {
                let w: UiWire = decode(test_type, fields)?;
                let action = match w.action.as_deref().unwrap_or(UNKNOWN) {
                    "file_upload" => UiAction::FileUpload,
                    "tab_switch" => UiAction::TabSwitch {
                        tab_names: w.tab_names.unwrap_or_default(),
                    },
                    "button_enable" => UiAction::ButtonEnable {
                        button_names: w.button_names.unwrap_or_default(),
                    },
                    "error_handling" => UiAction::ErrorHandling {
                        scenario: or_unknown(w.scenario),
                    },
                    other => UiAction::Other(other.to_string()),
                };
                Self::UiFunctionality(action)
            }
            Category::Crypto(CryptoCategory::Other)
            | Category::Media(MediaCategory::Other)
            | Category::Unmatched => Self::Unclassified,
        };
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(v: serde_json::Value) -> RawRecord {
        v.as_object().cloned().unwrap()
    }

    fn build(tag: &str, v: serde_json::Value) -> Result<CaseParams, RecordError> {
        CaseParams::from_fields(&Category::classify(tag), tag, &fields(v))
    }

    #[test]
    fn roundtrip_defaults_apply_when_keys_absent() {
        let p = build("encryption_roundtrip", json!({})).unwrap();
        assert_eq!(
            p,
            CaseParams::EncryptionRoundtrip(RoundtripParams {
                format: "base64".into(),
                algorithm: "AES".into(),
            })
        );
    }

    #[test]
    fn null_is_treated_as_absent() {
        let p = build("decryption", json!({"has_correct_pass": null})).unwrap();
        assert_eq!(
            p,
            CaseParams::Decryption(DecryptionParams {
                has_correct_pass: true
            })
        );
    }

    #[test]
    fn wrong_type_is_a_construction_error() {
        let err = build("image_resize", json!({"operation": "resize_w", "width": "wide"}))
            .unwrap_err();
        match err {
            RecordError::InvalidParam { test_type, .. } => assert_eq!(test_type, "image_resize"),
            other => panic!("unexpected error: {other}"),
        }

        assert!(build("ui_functionality", json!({"action": "tab_switch", "tab_names": "Convert"}))
            .is_err());
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let p = build("encoding", json!({"format": "hex", "input": "abc", "width": "x"})).unwrap();
        assert_eq!(p, CaseParams::Encoding(EncodingParams { format: "hex".into() }));
    }

    #[test]
    fn resize_operation_is_parsed() {
        let p = build(
            "image_resize",
            json!({"operation": "resize_wh", "width": 100, "height": 200}),
        )
        .unwrap();
        assert_eq!(
            p,
            CaseParams::ImageResize(ResizeParams {
                operation: ResizeOp::WidthHeight,
                width: Some(100),
                height: Some(200),
            })
        );
        assert_eq!(ResizeOp::parse("crop").as_str(), "crop");
    }

    #[test]
    fn ui_actions_are_dispatched_on_action_tag() {
        let p = build(
            "ui_functionality",
            json!({"action": "button_enable", "button_names": ["a", "b"]}),
        )
        .unwrap();
        assert_eq!(
            p,
            CaseParams::UiFunctionality(UiAction::ButtonEnable {
                button_names: vec!["a".into(), "b".into()]
            })
        );

        let p = build("ui_functionality", json!({})).unwrap();
        assert_eq!(p, CaseParams::UiFunctionality(UiAction::Other("unknown".into())));
    }

    #[test]
    fn family_prefixed_but_unknown_categories_are_unclassified() {
        assert_eq!(
            build("encryption_stream", json!({"algorithm": 7})).unwrap(),
            CaseParams::Unclassified
        );
        assert_eq!(build("storage", json!({})).unwrap(), CaseParams::Unclassified);
    }
}
