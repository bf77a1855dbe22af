//! Split configuration
//!
//! Chunk size, target extension and the two roots are passed explicitly into
//! the walker and the chunker rather than read from globals.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::error::{Result, SplitError};

/// Default number of whitespace tokens per output file
pub const DEFAULT_CHUNK_SIZE: usize = 2000;

/// Default target extension (without the leading dot)
pub const DEFAULT_EXTENSION: &str = "py";

/// Configuration for a tree walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Tokens per output file, also the split threshold
    pub chunk_size: usize,

    /// Target extension without the leading dot
    pub extension: String,

    /// Root directory to scan
    pub input_root: PathBuf,

    /// Root directory that receives the mirrored chunk files
    pub output_root: PathBuf,
}

impl SplitConfig {
    /// Create a config with default chunk size and extension
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            extension: DEFAULT_EXTENSION.to_string(),
            input_root: input_root.into(),
            output_root: output_root.into(),
        }
    }

    /// Set the chunk size
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the target extension; a leading dot is accepted and stripped
    pub fn with_extension(mut self, extension: impl AsRef<str>) -> Self {
        self.extension = normalize_extension(extension.as_ref());
        self
    }

    /// Reject configurations that would make splitting meaningless
    pub fn validate(&self) -> Result<()> {
        validate_chunk_size(self.chunk_size)?;

        let ext = &self.extension;
        if ext.is_empty() || ext.contains(['/', '\\']) || ext.chars().any(char::is_whitespace) {
            return Err(SplitError::InvalidExtension(ext.clone()));
        }

        Ok(())
    }

    /// Suffix a candidate file name must end with, e.g. `.py`
    pub fn suffix(&self) -> String {
        extension_suffix(&self.extension)
    }

    pub fn input_root(&self) -> &Path {
        &self.input_root
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }
}

/// Chunk size must be positive
pub fn validate_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(SplitError::InvalidChunkSize(chunk_size));
    }
    Ok(())
}

/// File-name suffix for an extension given with or without its dot
pub fn extension_suffix(ext: &str) -> String {
    format!(".{}", normalize_extension(ext))
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_string()
}
