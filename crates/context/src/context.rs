//! The addon invocation context.
//!
//! Responsibilities:
//! - Define the fixed-shape `AddonContext` struct and its helper types.
//!
//! Does NOT handle:
//! - Reading environment variables or files (see loader.rs).
//! - Rendering (see report.rs).
//!
//! Invariants:
//! - Every field is independently optional: absence of one never prevents
//!   loading or reporting the others.
//! - The struct is assembled once per invocation and never mutated after.
//! - The DSC session token is never stored; only its presence survives as
//!   a `Redacted` marker.

use std::fmt;
use std::path::PathBuf;

use crate::item::{FileMeta, ItemData};

/// Marker printed in place of the DSC session token.
pub const REDACTED_MARKER: &str = "***";

/// User-supplied input from the Docspell web UI.
///
/// Docspell passes the raw file through as-is, so the content may be JSON
/// or arbitrary text. Malformed JSON deliberately falls back to the raw
/// text instead of failing; only the four metadata files are strict.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UserInput {
    /// The file parsed as JSON (object, array, string, number, bool, null).
    Json(serde_json::Value),
    /// The file content was not valid JSON; the trimmed raw text.
    RawText(String),
    /// No argument given, file missing, or content empty.
    #[default]
    Absent,
}

impl UserInput {
    pub fn is_absent(&self) -> bool {
        matches!(self, UserInput::Absent)
    }
}

/// Presence marker for a secret that was set but must never be retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redacted;

impl fmt::Display for Redacted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED_MARKER)
    }
}

/// Everything Docspell provides to an addon invocation.
#[derive(Debug, Clone, Default)]
pub struct AddonContext {
    /// First positional argument: path to user-supplied data from the web UI.
    pub user_input_file: Option<PathBuf>,
    pub user_input: UserInput,

    // Basic environment (always provided by Docspell)
    pub addon_dir: Option<String>,
    pub tmp_dir: Option<String>,
    pub output_dir: Option<String>,
    pub cache_dir: Option<String>,

    // Item context (final-process-item, final-reprocess-item, existing-item)
    pub item_dir: Option<String>,
    pub item_data: Option<ItemData>,
    pub item_args: Option<serde_json::Value>,
    pub item_original: Option<Vec<FileMeta>>,
    pub item_pdf: Option<Vec<FileMeta>>,
    pub item_original_dir: Option<String>,
    pub item_pdf_dir: Option<String>,

    // Session for dsc (when the addon runs on behalf of a user)
    pub docspell_url: Option<String>,
    pub session: Option<Redacted>,
}
