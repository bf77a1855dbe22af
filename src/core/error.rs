//! Error types for splitting and walking

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while reading, walking or writing chunk files.
///
/// Every I/O variant carries the path that failed so the CLI can report
/// which file and which operation (read, mkdir, write) went wrong.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("chunk size must be a positive integer, got {0}")]
    InvalidChunkSize(usize),

    #[error("invalid target extension: {0:?}")]
    InvalidExtension(String),

    #[error("{} is not under input root {}", path.display(), root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },
}

impl SplitError {
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        SplitError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn create_dir(path: &Path, source: std::io::Error) -> Self {
        SplitError::CreateDir {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write(path: &Path, source: std::io::Error) -> Self {
        SplitError::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Short machine-readable code used in reports
    pub fn code(&self) -> &'static str {
        match self {
            SplitError::Read { .. } => "READ_FAILED",
            SplitError::CreateDir { .. } => "MKDIR_FAILED",
            SplitError::Write { .. } => "WRITE_FAILED",
            SplitError::Walk { .. } => "WALK_FAILED",
            SplitError::InvalidChunkSize(_) | SplitError::InvalidExtension(_) => "INVALID_CONFIG",
            SplitError::OutsideRoot { .. } => "OUTSIDE_ROOT",
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
