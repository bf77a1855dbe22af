//! Tree walker - find oversized files and hand them to the chunker
//!
//! Uses walkdir for traversal. Candidate paths are collected before anything
//! is written, so an output root nested inside the input root is never
//! rescanned during the same run.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::backends::chunker::{read_source, write_chunks};
use crate::core::config::SplitConfig;
use crate::core::error::SplitError;
use crate::core::model::{FileOutcome, SplitReport};
use crate::core::paths::{has_suffix, make_relative, mirror_dir, normalize_path};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::tokenizer::count_tokens;

/// What to do when a single file fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop the walk and return the first error
    #[default]
    Abort,
    /// Record the failure in the report and keep walking
    Continue,
}

/// Walk `config.input_root` and split every candidate whose token count is
/// strictly greater than `config.chunk_size`
pub fn process_tree(config: &SplitConfig, policy: ErrorPolicy) -> Result<SplitReport, SplitError> {
    config.validate()?;
    ensure_dir(config.input_root())?;

    let mut report = SplitReport::new();
    let candidates = collect_candidates(config, policy, &mut report)?;
    tracing::debug!(
        root = %config.input_root().display(),
        candidates = candidates.len(),
        "collected candidates"
    );

    for outcome in run_candidates(config, &candidates, policy)? {
        report.push(outcome);
    }

    report.sort();
    Ok(report)
}

fn ensure_dir(root: &Path) -> Result<(), SplitError> {
    let metadata = fs::metadata(root).map_err(|e| SplitError::read(root, e))?;
    if !metadata.is_dir() {
        return Err(SplitError::read(
            root,
            std::io::Error::other("not a directory"),
        ));
    }
    Ok(())
}

/// Every file under the input root whose name ends with the target suffix
fn collect_candidates(
    config: &SplitConfig,
    policy: ErrorPolicy,
    report: &mut SplitReport,
) -> Result<Vec<PathBuf>, SplitError> {
    let suffix = config.suffix();
    let root = config.input_root();
    let mut candidates = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                let err = SplitError::Walk {
                    path: path.clone(),
                    source: e,
                };
                match policy {
                    ErrorPolicy::Abort => return Err(err),
                    ErrorPolicy::Continue => {
                        tracing::warn!(error = %err, "skipping unreadable entry");
                        report.push(FileOutcome::failed(relative_name(&path, root), None, &err));
                        continue;
                    }
                }
            }
        };

        // Symlinked files count, symlinked directories are not followed
        if entry.file_type().is_dir() || !entry.path().is_file() {
            continue;
        }

        if has_suffix(entry.path(), &suffix) {
            candidates.push(entry.into_path());
        }
    }

    Ok(candidates)
}

fn run_candidates(
    config: &SplitConfig,
    candidates: &[PathBuf],
    policy: ErrorPolicy,
) -> Result<Vec<FileOutcome>, SplitError> {
    #[cfg(feature = "parallel")]
    let iter = candidates.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = candidates.iter();

    iter.map(|path| settle(config, path, policy)).collect()
}

/// Apply the error policy to a single file's result
fn settle(
    config: &SplitConfig,
    path: &Path,
    policy: ErrorPolicy,
) -> Result<FileOutcome, SplitError> {
    match process_file(config, path) {
        Ok(outcome) => Ok(outcome),
        Err(err) if policy == ErrorPolicy::Continue => {
            tracing::warn!(error = %err, "file failed, continuing");
            Ok(FileOutcome::failed(
                relative_name(path, config.input_root()),
                None,
                &err,
            ))
        }
        Err(err) => Err(err),
    }
}

/// Read, measure and (if oversized) split one candidate file
pub fn process_file(config: &SplitConfig, path: &Path) -> Result<FileOutcome, SplitError> {
    let relative = relative_name(path, config.input_root());
    let content = read_source(path)?;
    let tokens = count_tokens(&content);

    if tokens <= config.chunk_size {
        tracing::debug!(path = %relative, tokens, "at or below threshold, skipping");
        return Ok(FileOutcome::skipped(relative, tokens));
    }

    let output_dir = mirror_dir(path, config.input_root(), config.output_root())?;
    let chunks = write_chunks(
        path,
        &config.suffix(),
        &content,
        &output_dir,
        config.chunk_size,
    )?;
    tracing::info!(path = %relative, tokens, chunks = chunks.len(), "split file");

    Ok(FileOutcome::split(relative, tokens, chunks))
}

fn relative_name(path: &Path, root: &Path) -> String {
    make_relative(path, root).unwrap_or_else(|| normalize_path(path))
}

/// Run the tree command
pub fn run_process(config: &SplitConfig, policy: ErrorPolicy, format: RenderConfig) -> Result<()> {
    let report = process_tree(config, policy).with_context(|| {
        format!(
            "Failed to process {} into {}",
            config.input_root().display(),
            config.output_root().display()
        )
    })?;

    let summary = report.summary();
    tracing::info!(
        scanned = summary.scanned,
        split = summary.split,
        skipped = summary.skipped,
        failed = summary.failed,
        chunks = summary.chunks_written,
        "walk finished"
    );

    let renderer = Renderer::with_config(format);
    let output = renderer.render(&report);
    if !output.is_empty() {
        println!("{}", output);
    }

    if report.has_failures() {
        bail!("{} of {} file(s) failed", summary.failed, summary.scanned);
    }

    Ok(())
}
