//! Error types for context loading.
//!
//! Responsibilities:
//! - Define error variants for all context loading failures.
//! - Carry enough context (env var name, path) for a useful diagnostic.
//!
//! Does NOT handle:
//! - Manifest parsing errors (see manifest.rs).
//! - Exit code mapping (done by the binary crate).
//!
//! Invariants:
//! - Missing optional inputs are never an error; only unreadable or
//!   malformed files that were explicitly pointed at reach these variants.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret
//!   leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the addon context.
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Failed to read file for {var} at {path}")]
    FileRead {
        var: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON for {var} at {path}: {source}")]
    JsonParse {
        var: String,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
