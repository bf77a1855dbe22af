//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::backends::walker::ErrorPolicy;
use crate::core::config::{extension_suffix, SplitConfig, DEFAULT_CHUNK_SIZE, DEFAULT_EXTENSION};
use crate::core::render::{OutputFormat, RenderConfig};

/// tokensplit - split oversized text files into fixed-size token chunks.
#[derive(Parser, Debug)]
#[command(name = "tokensplit")]
#[command(
    author,
    version,
    about,
    long_about = r#"tokensplit walks a directory tree, finds files of a target extension whose
whitespace token count exceeds a threshold, and splits each into chunk files
written to a mirrored directory tree.

A token is any run of non-whitespace characters. Chunks are re-joined with a
single space, so the original whitespace layout is not preserved.

Each command prints a report in the selected format (default: jsonl).

Examples:
    tokensplit run src/ chunks/
    tokensplit --tokens-per-file 500 --extension rs run crates/ out/
    tokensplit file big.py out/
    tokensplit count big.py
"#
)]
pub struct Cli {
    /// Tokens per output file (also the split threshold).
    #[arg(
        long,
        global = true,
        env = "TOKENSPLIT_TOKENS_PER_FILE",
        default_value_t = DEFAULT_CHUNK_SIZE,
        value_name = "N",
        long_help = "Number of whitespace tokens per output file.\n\n\
A file is split only when its token count is strictly greater than N.\n\
Must be a positive integer."
    )]
    pub tokens_per_file: usize,

    /// Target file extension (without the dot).
    #[arg(
        long,
        global = true,
        env = "TOKENSPLIT_EXTENSION",
        default_value = DEFAULT_EXTENSION,
        value_name = "EXT",
        long_help = "Only files whose name ends with .EXT are considered by `run`.\n\n\
A leading dot is accepted (\".py\" and \"py\" are equivalent)."
    )]
    pub extension: String,

    /// Output format (jsonl/json/md).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        value_name = "FORMAT",
        long_help = "Select the output format for the report.\n\n\
Supported values:\n\
- jsonl (default): one JSON object per file\n\
- json: a single JSON document with a summary\n\
- md (markdown)"
    )]
    pub format: OutputFormat,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (per-file decisions on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split every oversized file under INPUT into a mirrored tree under OUTPUT.
    #[command(
        long_about = "Recursively scan INPUT for files ending in .EXT, count their tokens, and\n\
split every file with more than N tokens into OUTPUT/<relative dir>/<stem>_part_<i>.<ext>.\n\n\
Files at or below the threshold are reported as skipped and produce no output.\n\
By default the first read or write error aborts the whole run.\n\n\
Examples:\n\
  tokensplit run src/ chunks/\n\
  tokensplit run src/ chunks/ --keep-going\n"
    )]
    Run {
        /// Root directory to scan.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Root directory for the mirrored chunk files.
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Record per-file failures and continue instead of aborting.
        #[arg(
            long,
            long_help = "Record read/write failures per file and continue walking.\n\n\
Failed files appear in the report with an error code; the exit status is\n\
non-zero if any file failed."
        )]
        keep_going: bool,
    },

    /// Split a single file into chunks, regardless of its size.
    #[command(long_about = "Split FILE into chunks of N tokens written directly under OUTPUT_DIR.\n\n\
Example:\n\
  tokensplit file big.py out/\n")]
    File {
        /// File to split.
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Directory that receives the chunk files.
        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: PathBuf,
    },

    /// Print a file's whitespace token count.
    Count {
        /// File to measure.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    /// Default log filter for the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let render_config = RenderConfig::with_pretty(cli.format, cli.pretty);

    match cli.command {
        Commands::Run {
            input,
            output,
            keep_going,
        } => {
            let config = SplitConfig::new(input, output)
                .with_chunk_size(cli.tokens_per_file)
                .with_extension(&cli.extension);
            let policy = if keep_going {
                ErrorPolicy::Continue
            } else {
                ErrorPolicy::Abort
            };
            crate::backends::walker::run_process(&config, policy, render_config)
        }

        Commands::File { file, output_dir } => crate::backends::chunker::run_file(
            &file,
            &output_dir,
            cli.tokens_per_file,
            &extension_suffix(&cli.extension),
            render_config,
        ),

        Commands::Count { file } => crate::backends::chunker::run_count(&file, render_config),
    }
}
