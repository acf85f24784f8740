//! errors.rs - Custom error types for the profanity-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `profanity-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProfanityError {
    #[error("Failed to compile word list '{0}': {1}")]
    SourceCompilation(String, regex::Error),

    #[error("Failed to read word list '{}': {source}", path.display())]
    WordListRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to fetch remote word list: {0}")]
    RemoteWordList(String),

    #[error("Filtering was cancelled after {completed_steps} step(s)")]
    Cancelled { completed_steps: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
