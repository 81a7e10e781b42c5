use std::path::PathBuf;

use crate::model::EvaluatorFamily;

/// A record that could not be turned into a [`crate::model::TestCase`].
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line is not valid UTF-8")]
    Utf8,

    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` must be a string")]
    NotAString(&'static str),

    #[error("invalid parameters for `{test_type}`: {message}")]
    InvalidParam { test_type: String, message: String },
}

impl RecordError {
    pub(crate) fn invalid_param(test_type: &str, err: serde_json::Error) -> Self {
        Self::InvalidParam {
            test_type: test_type.to_string(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EvaluatorSetError {
    #[error("evaluator `{name}` scores {found:?} cases but was supplied for {expected:?}")]
    FamilyMismatch {
        name: &'static str,
        expected: EvaluatorFamily,
        found: EvaluatorFamily,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read dataset {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DatasetError {
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }
}
