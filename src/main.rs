//! tokensplit - split oversized text files into fixed-size token chunks
//!
//! tokensplit provides:
//! - Recursive scanning for files of a target extension
//! - Whitespace token counting with a strict-greater-than split threshold
//! - Fixed-size chunk files written into a mirrored output tree
//! - Unified report output (jsonl/json/md)

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod backends;
mod cli;
mod core;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // RUST_LOG wins over -q/-v; logs go to stderr so stdout stays parseable
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    cli::run(cli)
}
