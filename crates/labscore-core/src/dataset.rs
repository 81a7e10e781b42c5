//! Newline-delimited JSON dataset loading.
//!
//! One record per line, blank lines ignored. Lines that fail validation are
//! collected as [`RejectedRecord`]s instead of aborting the load.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::errors::{DatasetError, RecordError};
use crate::model::{RawRecord, TestCase};

/// A dataset line that could not be turned into a test case.
///
/// Rejected records still count toward the run: the engine scores each one
/// as a 0.0 case with status `rejected`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRecord {
    /// 1-based line number in the dataset file.
    pub line: usize,
    /// 0-based position among the non-blank lines, shared with accepted cases.
    #[serde(skip)]
    pub position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_type: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub path: PathBuf,
    pub cases: Vec<TestCase>,
    pub rejected: Vec<RejectedRecord>,
    pub digest: Option<String>,
}

impl Dataset {
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

pub fn sha256_digest(bytes: &[u8]) -> String {
    format!("sha256:{}", hex::encode(Sha256::digest(bytes)))
}

/// Identifying fields salvaged from a record that failed validation.
#[derive(Default)]
struct Salvaged {
    test_id: Option<String>,
    test_type: Option<String>,
}

impl Salvaged {
    fn from_record(record: &RawRecord) -> Self {
        let field = |name: &str| {
            record
                .get(name)
                .and_then(|v| v.as_str())
                .map(ToString::to_string)
        };
        Self {
            test_id: field("test_id"),
            test_type: field("test_type"),
        }
    }
}

fn parse_line(line: &[u8]) -> Result<TestCase, (Salvaged, RecordError)> {
    let text = std::str::from_utf8(line).map_err(|_| (Salvaged::default(), RecordError::Utf8))?;
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| (Salvaged::default(), RecordError::from(e)))?;
    let record: RawRecord = match value {
        serde_json::Value::Object(map) => map,
        _ => return Err((Salvaged::default(), RecordError::NotAnObject)),
    };
    TestCase::from_record(&record).map_err(|e| (Salvaged::from_record(&record), e))
}

/// Parse dataset bytes. Never fails; bad lines end up in the second vector.
pub fn parse_records(bytes: &[u8]) -> (Vec<TestCase>, Vec<RejectedRecord>) {
    let mut cases = Vec::new();
    let mut rejected = Vec::new();
    let mut position = 0;

    for (idx, raw) in bytes.split(|b| *b == b'\n').enumerate() {
        let line = raw.trim_ascii();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(case) => cases.push(case),
            Err((salvaged, err)) => {
                tracing::warn!(line = idx + 1, error = %err, "rejected dataset record");
                rejected.push(RejectedRecord {
                    line: idx + 1,
                    position,
                    test_id: salvaged.test_id,
                    test_type: salvaged.test_type,
                    reason: err.to_string(),
                });
            }
        }
        position += 1;
    }

    (cases, rejected)
}

/// Read and parse the dataset at `path`.
pub fn read_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let bytes = std::fs::read(path).map_err(|e| DatasetError::from_io(path, e))?;
    let (cases, rejected) = parse_records(&bytes);
    tracing::info!(
        path = %path.display(),
        cases = cases.len(),
        rejected = rejected.len(),
        "loaded dataset"
    );
    Ok(Dataset {
        path: path.to_path_buf(),
        cases,
        rejected,
        digest: Some(sha256_digest(&bytes)),
    })
}

/// Like [`read_dataset`], but an absent or unreadable file yields an empty dataset.
pub fn load_dataset(path: &Path) -> Dataset {
    match read_dataset(path) {
        Ok(ds) => ds,
        Err(e) => {
            tracing::warn!(error = %e, "no test cases loaded");
            Dataset::empty(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CaseParams;

    #[test]
    fn blank_lines_are_ignored() {
        let data = b"\n{\"test_id\":\"a\",\"test_type\":\"encoding\",\"format\":\"hex\"}\n\n   \n{\"test_id\":\"b\",\"test_type\":\"storage\"}\n";
        let (cases, rejected) = parse_records(data);
        assert!(rejected.is_empty());
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].test_id, "a");
        assert_eq!(cases[1].params, CaseParams::Unclassified);
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let data = b"{\"test_id\":\"a\",\"test_type\":\"encoding\"}\r\n{\"test_id\":\"b\",\"test_type\":\"encoding\"}\r\n";
        let (cases, rejected) = parse_records(data);
        assert_eq!(cases.len(), 2);
        assert!(rejected.is_empty());
    }

    #[test]
    fn bad_lines_are_rejected_with_line_numbers() {
        let data = concat!(
            "{\"test_id\":\"ok\",\"test_type\":\"decryption\",\"has_correct_pass\":false}\n",
            "not json\n",
            "[1,2]\n",
            "{\"test_type\":\"encoding\"}\n",
            "{\"test_id\":\"r1\",\"test_type\":\"image_resize\",\"width\":-5}\n",
        );
        let (cases, rejected) = parse_records(data.as_bytes());
        assert_eq!(cases.len(), 1);
        let lines: Vec<usize> = rejected.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![2, 3, 4, 5]);
        assert!(rejected[0].reason.starts_with("invalid JSON"));
        assert_eq!(rejected[1].reason, "record is not a JSON object");
        assert_eq!(rejected[2].reason, "missing required field `test_id`");
        assert_eq!(rejected[3].test_id.as_deref(), Some("r1"));
        assert_eq!(rejected[3].test_type.as_deref(), Some("image_resize"));
    }

    #[test]
    fn rejected_positions_skip_blank_lines() {
        let data = "\nnot json\n{\"test_id\":\"a\",\"test_type\":\"encoding\"}\n\n{\"test_id\":\"d\",\"test_type\":7}\n";
        let (cases, rejected) = parse_records(data.as_bytes());
        assert_eq!(cases.len(), 1);
        let positions: Vec<usize> = rejected.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![0, 2]);
        assert_eq!(rejected[1].line, 5);
        assert_eq!(rejected[1].test_id.as_deref(), Some("d"));
        assert_eq!(rejected[1].test_type, None);
    }

    #[test]
    fn invalid_utf8_rejects_only_that_line() {
        let mut data = b"{\"test_id\":\"a\",\"test_type\":\"encoding\"}\n".to_vec();
        data.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let (cases, rejected) = parse_records(&data);
        assert_eq!(cases.len(), 1);
        assert_eq!(rejected[0].reason, "line is not valid UTF-8");
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.jsonl");
        assert!(matches!(
            read_dataset(&path),
            Err(DatasetError::NotFound { .. })
        ));
        let ds = load_dataset(&path);
        assert!(ds.is_empty());
        assert!(ds.digest.is_none());
    }

    #[test]
    fn digest_is_sha256_of_file_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.jsonl");
        std::fs::write(&path, "").unwrap();
        let ds = read_dataset(&path).unwrap();
        assert_eq!(
            ds.digest.as_deref(),
            Some("sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
        );
    }
}
