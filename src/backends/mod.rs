//! Backends module - File operations
//!
//! Provides:
//! - chunker: Split one file into fixed-size token chunks
//! - walker: Recursive scan that delegates oversized files to the chunker

pub mod chunker;
pub mod walker;
