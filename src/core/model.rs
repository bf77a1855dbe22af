//! Split report model
//!
//! The walker records one `FileOutcome` per candidate file. The CLI renders
//! the resulting `SplitReport` as jsonl, json or markdown.

use serde::{Deserialize, Serialize};

use crate::core::error::SplitError;

/// What happened to a candidate file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Token count exceeded the threshold and chunk files were written
    Split,
    /// Token count was at or below the threshold
    Skipped,
    /// Reading or writing failed (only recorded when the walk keeps going)
    Failed,
}

/// One written chunk file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// Output path, '/'-separated
    pub path: String,

    /// 1-based chunk index
    pub index: usize,

    /// Number of tokens in this chunk
    pub tokens: usize,
}

/// Error information attached to a failed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeError {
    pub code: String,
    pub message: String,
}

impl From<&SplitError> for OutcomeError {
    fn from(err: &SplitError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Outcome for a single candidate file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    /// Source path relative to the input root, '/'-separated
    pub path: String,

    pub status: Status,

    /// Token count of the source (absent if it could not be read)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<usize>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chunks: Vec<ChunkRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<OutcomeError>,
}

impl FileOutcome {
    pub fn split(path: impl Into<String>, tokens: usize, chunks: Vec<ChunkRecord>) -> Self {
        Self {
            path: path.into(),
            status: Status::Split,
            tokens: Some(tokens),
            chunks,
            error: None,
        }
    }

    pub fn skipped(path: impl Into<String>, tokens: usize) -> Self {
        Self {
            path: path.into(),
            status: Status::Skipped,
            tokens: Some(tokens),
            chunks: Vec::new(),
            error: None,
        }
    }

    pub fn failed(path: impl Into<String>, tokens: Option<usize>, err: &SplitError) -> Self {
        Self {
            path: path.into(),
            status: Status::Failed,
            tokens,
            chunks: Vec::new(),
            error: Some(err.into()),
        }
    }
}

/// Totals over a whole walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Candidate files visited
    pub scanned: usize,
    pub split: usize,
    pub skipped: usize,
    pub failed: usize,
    pub chunks_written: usize,
}

/// Collection of per-file outcomes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SplitReport {
    pub files: Vec<FileOutcome>,
}

impl SplitReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: FileOutcome) {
        self.files.push(outcome);
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Sort outcomes by path for stable output
    pub fn sort(&mut self) {
        self.files.sort_by(|a, b| a.path.cmp(&b.path));
    }

    pub fn has_failures(&self) -> bool {
        self.files.iter().any(|f| f.status == Status::Failed)
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            scanned: self.files.len(),
            ..Summary::default()
        };
        for file in &self.files {
            match file.status {
                Status::Split => summary.split += 1,
                Status::Skipped => summary.skipped += 1,
                Status::Failed => summary.failed += 1,
            }
            summary.chunks_written += file.chunks.len();
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn chunk(path: &str, index: usize, tokens: usize) -> ChunkRecord {
        ChunkRecord {
            path: path.to_string(),
            index,
            tokens,
        }
    }

    #[test]
    fn test_summary_counts() {
        let mut report = SplitReport::new();
        report.push(FileOutcome::skipped("small.py", 10));
        report.push(FileOutcome::split(
            "big.py",
            3,
            vec![chunk("big_part_1.py", 1, 2), chunk("big_part_2.py", 2, 1)],
        ));
        let err = SplitError::InvalidChunkSize(0);
        report.push(FileOutcome::failed("bad.py", None, &err));

        let summary = report.summary();
        assert_eq!(summary.scanned, 3);
        assert_eq!(summary.split, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.chunks_written, 2);
        assert!(report.has_failures());
    }

    #[test]
    fn test_sort_by_path() {
        let mut report = SplitReport::new();
        report.push(FileOutcome::skipped("z.py", 1));
        report.push(FileOutcome::skipped("a/b.py", 1));
        report.push(FileOutcome::skipped("a.py", 1));
        report.sort();

        let paths: Vec<_> = report.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["a.py", "a/b.py", "z.py"]);
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let json = serde_json::to_string(&FileOutcome::skipped("x.py", 5)).unwrap();
        assert_eq!(json, r#"{"path":"x.py","status":"skipped","tokens":5}"#);
    }

    #[test]
    fn test_failed_outcome_carries_error_code() {
        let err = SplitError::read(
            Path::new("x.py"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let outcome = FileOutcome::failed("x.py", None, &err);
        let error = outcome.error.unwrap();
        assert_eq!(error.code, "READ_FAILED");
        assert!(error.message.contains("x.py"));
    }
}
