use serde::Serialize;
use std::collections::BTreeMap;

use crate::errors::RecordError;
use crate::params::CaseParams;

/// One dataset line as read, before validation.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// The three evaluator families a category can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EvaluatorFamily {
    Crypto,
    Media,
    Functional,
}

impl EvaluatorFamily {
    pub const ALL: [EvaluatorFamily; 3] = [Self::Crypto, Self::Media, Self::Functional];

    /// Key under which the family's outcome is stored in a [`CaseResult`].
    pub fn key(self) -> &'static str {
        match self {
            Self::Crypto => "encryption",
            Self::Media => "image_quality",
            Self::Functional => "functional_completeness",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Crypto => "Encryption Correctness",
            Self::Media => "Image Processing Quality",
            Self::Functional => "Functional Completeness",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoCategory {
    EncryptionRoundtrip,
    Encryption,
    Decryption,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCategory {
    ImageConversion,
    ImageResize,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionalCategory {
    Encoding,
    UiFunctionality,
}

/// Closed routing type for a record's `test_type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Crypto(CryptoCategory),
    Media(MediaCategory),
    Functional(FunctionalCategory),
    Unmatched,
}

impl Category {
    /// Tags starting with `encryption`/`decryption` are crypto, tags starting with
    /// `image` are media, and exactly `ui_functionality`/`encoding` are functional.
    pub fn classify(tag: &str) -> Self {
        match tag {
            "encryption_roundtrip" => Self::Crypto(CryptoCategory::EncryptionRoundtrip),
            "encryption" => Self::Crypto(CryptoCategory::Encryption),
            "decryption" => Self::Crypto(CryptoCategory::Decryption),
            "image_conversion" => Self::Media(MediaCategory::ImageConversion),
            "image_resize" => Self::Media(MediaCategory::ImageResize),
            "encoding" => Self::Functional(FunctionalCategory::Encoding),
            "ui_functionality" => Self::Functional(FunctionalCategory::UiFunctionality),
            t if t.starts_with("encryption") || t.starts_with("decryption") => {
                Self::Crypto(CryptoCategory::Other)
            }
            t if t.starts_with("image") => Self::Media(MediaCategory::Other),
            _ => Self::Unmatched,
        }
    }

    pub fn family(self) -> Option<EvaluatorFamily> {
        match self {
            Self::Crypto(_) => Some(EvaluatorFamily::Crypto),
            Self::Media(_) => Some(EvaluatorFamily::Media),
            Self::Functional(_) => Some(EvaluatorFamily::Functional),
            Self::Unmatched => None,
        }
    }
}

/// A validated test case. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub test_id: String,
    pub test_type: String,
    pub category: Category,
    pub params: CaseParams,
}

fn required_str(record: &RawRecord, field: &'static str) -> Result<String, RecordError> {
    match record.get(field) {
        None | Some(serde_json::Value::Null) => Err(RecordError::MissingField(field)),
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(RecordError::NotAString(field)),
    }
}

impl TestCase {
    pub fn from_record(record: &RawRecord) -> Result<Self, RecordError> {
        let test_id = required_str(record, "test_id")?;
        let test_type = required_str(record, "test_type")?;
        let category = Category::classify(&test_type);
        let params = CaseParams::from_fields(&category, &test_type, record)?;
        Ok(Self {
            test_id,
            test_type,
            category,
            params,
        })
    }
}

impl TryFrom<serde_json::Value> for TestCase {
    type Error = RecordError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Object(record) => Self::from_record(&record),
            _ => Err(RecordError::NotAnObject),
        }
    }
}

/// The single score an evaluator emits, serialized under its family's field name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum FamilyScore {
    #[serde(rename = "correctness_score")]
    Correctness(f64),
    #[serde(rename = "quality_score")]
    Quality(f64),
    #[serde(rename = "completeness_score")]
    Completeness(f64),
}

impl FamilyScore {
    /// Clamps `value` into [0.0, 1.0].
    pub fn new(family: EvaluatorFamily, value: f64) -> Self {
        let value = value.clamp(0.0, 1.0);
        match family {
            EvaluatorFamily::Crypto => Self::Correctness(value),
            EvaluatorFamily::Media => Self::Quality(value),
            EvaluatorFamily::Functional => Self::Completeness(value),
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Self::Correctness(v) | Self::Quality(v) | Self::Completeness(v) => v,
        }
    }

    pub fn field_name(self) -> &'static str {
        match self {
            Self::Correctness(_) => "correctness_score",
            Self::Quality(_) => "quality_score",
            Self::Completeness(_) => "completeness_score",
        }
    }
}

/// Output of one evaluator for one test case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationOutcome {
    pub test_id: String,
    pub test_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_operation: Option<String>,
    #[serde(flatten)]
    pub flags: BTreeMap<&'static str, bool>,
    #[serde(flatten)]
    pub score: FamilyScore,
}

impl EvaluationOutcome {
    pub fn new(case: &TestCase, score: FamilyScore) -> Self {
        Self {
            test_id: case.test_id.clone(),
            test_type: case.test_type.clone(),
            resize_operation: None,
            flags: BTreeMap::new(),
            score,
        }
    }

    pub fn with_flag(mut self, name: &'static str, value: bool) -> Self {
        self.flags.insert(name, value);
        self
    }

    pub fn with_resize_operation(mut self, operation: impl Into<String>) -> Self {
        self.resize_operation = Some(operation.into());
        self
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        self.flags.get(name).copied()
    }

    pub fn score(&self) -> f64 {
        self.score.value()
    }
}

/// Whether any evaluator looked at a case. Keeps "no evaluator matched" and
/// "record failed validation" apart from "matched and scored 0.0".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Scored,
    NotApplicable,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseResult {
    pub test_id: String,
    pub test_type: String,
    pub evaluations: BTreeMap<&'static str, EvaluationOutcome>,
    pub overall_score: f64,
    pub status: CaseStatus,
}
