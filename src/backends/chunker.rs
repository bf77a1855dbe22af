//! Chunker - split one file into fixed-size token chunks

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::config::validate_chunk_size;
use crate::core::error::SplitError;
use crate::core::model::{ChunkRecord, FileOutcome, SplitReport};
use crate::core::paths::{chunk_file_name, has_suffix, normalize_path, source_suffix};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::tokenizer::{chunk_tokens, count_tokens, tokenize};

/// Read a whole source file as text
pub fn read_source(path: &Path) -> Result<String, SplitError> {
    fs::read_to_string(path).map_err(|e| SplitError::read(path, e))
}

/// Split `file_path` into chunks of `chunk_size` tokens under `output_dir`
///
/// Writes `<stem>_part_<i>.<ext>` for i = 1.. and returns the written chunks
/// in index order. Existing files are overwritten. A file with no tokens
/// produces no output files. The suffix is taken from the file name itself;
/// see `write_chunks` to name chunks after a configured target suffix.
pub fn split_file(
    file_path: &Path,
    output_dir: &Path,
    chunk_size: usize,
) -> Result<Vec<ChunkRecord>, SplitError> {
    validate_chunk_size(chunk_size)?;
    let content = read_source(file_path)?;
    write_chunks(
        file_path,
        &source_suffix(file_path),
        &content,
        output_dir,
        chunk_size,
    )
}

/// Write the chunks of already-read `content` belonging to `source`
///
/// Chunk names strip `suffix` from the file name and re-append it after the
/// part number. `output_dir` is created even when `content` has no tokens,
/// so splitting an empty file leaves an empty directory behind. Chunk files
/// written before a failing write stay on disk.
pub fn write_chunks(
    source: &Path,
    suffix: &str,
    content: &str,
    output_dir: &Path,
    chunk_size: usize,
) -> Result<Vec<ChunkRecord>, SplitError> {
    validate_chunk_size(chunk_size)?;

    fs::create_dir_all(output_dir).map_err(|e| SplitError::create_dir(output_dir, e))?;

    let tokens = tokenize(content);
    let mut records = Vec::with_capacity(tokens.len().div_ceil(chunk_size));

    for (i, (count, text)) in chunk_tokens(&tokens, chunk_size).enumerate() {
        let index = i + 1;
        let out_path = output_dir.join(chunk_file_name(source, suffix, index));

        fs::write(&out_path, text).map_err(|e| SplitError::write(&out_path, e))?;
        tracing::debug!(path = %out_path.display(), index, tokens = count, "wrote chunk");

        records.push(ChunkRecord {
            path: normalize_path(&out_path),
            index,
            tokens: count,
        });
    }

    Ok(records)
}

/// Run the file command: split a single file regardless of its size
///
/// Chunks are named after `target_suffix` when the file ends with it, and
/// after the file's own suffix otherwise.
pub fn run_file(
    file: &Path,
    output_dir: &Path,
    chunk_size: usize,
    target_suffix: &str,
    format: RenderConfig,
) -> Result<()> {
    let suffix = if has_suffix(file, target_suffix) {
        target_suffix.to_string()
    } else {
        source_suffix(file)
    };

    let content = read_source(file)?;
    let tokens = count_tokens(&content);
    let chunks = write_chunks(file, &suffix, &content, output_dir, chunk_size)
        .with_context(|| format!("Failed to split {}", file.display()))?;

    tracing::info!(
        path = %file.display(),
        tokens,
        chunks = chunks.len(),
        "split file"
    );

    let mut report = SplitReport::new();
    report.push(FileOutcome::split(normalize_path(file), tokens, chunks));

    let renderer = Renderer::with_config(format);
    println!("{}", renderer.render(&report));

    Ok(())
}

/// Run the count command: report a file's token count without writing
pub fn run_count(file: &Path, format: RenderConfig) -> Result<()> {
    let content = read_source(file)?;
    let tokens = count_tokens(&content);

    let mut report = SplitReport::new();
    report.push(FileOutcome::skipped(normalize_path(file), tokens));

    let renderer = Renderer::with_config(format);
    println!("{}", renderer.render(&report));

    Ok(())
}
