//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Split configuration and its defaults
//! - Error types for read/mkdir/write failures
//! - Report model (FileOutcome, SplitReport)
//! - Rendering functions for different output formats
//! - Path mirroring and chunk naming
//! - Whitespace tokenization

pub mod config;
pub mod error;
pub mod model;
pub mod paths;
pub mod render;
pub mod tokenizer;
