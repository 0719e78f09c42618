//! Context loading from environment variables and files.
//!
//! Responsibilities:
//! - Read and parse the environment variables and files Docspell provides.
//! - Provide the `env_var_or_none` helper with empty/whitespace filtering.
//! - Load a `.env` file, gated by `DOTENV_DISABLED`.
//!
//! Does NOT handle:
//! - Rendering the loaded context (see report.rs).
//! - Manifest parsing (see manifest.rs).
//!
//! Invariants:
//! - Missing optional inputs are soft absences: they become `None` /
//!   `UserInput::Absent` and never fail the load.
//! - Malformed JSON in the four metadata files is a hard failure; only the
//!   user-input file falls back to raw text.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - No side effects other than file reads.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::context::{AddonContext, Redacted, UserInput};
use crate::error::ContextError;
use crate::item::{FileMeta, ItemData};

pub const ENV_ADDON_DIR: &str = "ADDON_DIR";
pub const ENV_TMP_DIR: &str = "TMP_DIR";
pub const ENV_TMP_DIR_FALLBACK: &str = "TMPDIR";
pub const ENV_OUTPUT_DIR: &str = "OUTPUT_DIR";
pub const ENV_CACHE_DIR: &str = "CACHE_DIR";
pub const ENV_ITEM_DIR: &str = "ITEM_DIR";
pub const ENV_ITEM_DATA_JSON: &str = "ITEM_DATA_JSON";
pub const ENV_ITEM_ARGS_JSON: &str = "ITEM_ARGS_JSON";
pub const ENV_ITEM_ORIGINAL_JSON: &str = "ITEM_ORIGINAL_JSON";
pub const ENV_ITEM_PDF_JSON: &str = "ITEM_PDF_JSON";
pub const ENV_ITEM_ORIGINAL_DIR: &str = "ITEM_ORIGINAL_DIR";
pub const ENV_ITEM_PDF_DIR: &str = "ITEM_PDF_DIR";
pub const ENV_DSC_DOCSPELL_URL: &str = "DSC_DOCSPELL_URL";
pub const ENV_DSC_SESSION: &str = "DSC_SESSION";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Load a `.env` file from the current directory, if present.
///
/// Set `DOTENV_DISABLED` to any value to skip loading (used by tests to
/// stay hermetic). A missing `.env` file is not an error.
pub fn load_dotenv() -> Result<(), ContextError> {
    if std::env::var_os("DOTENV_DISABLED").is_some() {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if is_not_found(&e) => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(ContextError::DotenvParse { error_index: idx }),
        Err(dotenvy::Error::Io(io_err)) => Err(ContextError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ContextError::DotenvUnknown),
    }
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

impl AddonContext {
    /// Gather all data Docspell provides to an addon.
    ///
    /// `user_input_file` is the first positional argument of the addon
    /// invocation. The only side effects are file reads; the only errors
    /// are unreadable or malformed metadata files that the environment
    /// explicitly pointed at.
    pub fn load(user_input_file: Option<PathBuf>) -> Result<Self, ContextError> {
        let user_input = match user_input_file.as_deref() {
            Some(path) => load_user_input(path)?,
            None => UserInput::Absent,
        };

        Ok(AddonContext {
            user_input_file,
            user_input,
            addon_dir: env_var_or_none(ENV_ADDON_DIR),
            tmp_dir: env_var_or_none(ENV_TMP_DIR).or_else(|| env_var_or_none(ENV_TMP_DIR_FALLBACK)),
            output_dir: env_var_or_none(ENV_OUTPUT_DIR),
            cache_dir: env_var_or_none(ENV_CACHE_DIR),
            item_dir: env_var_or_none(ENV_ITEM_DIR),
            item_data: load_json_file::<ItemData>(ENV_ITEM_DATA_JSON)?,
            item_args: load_json_file::<serde_json::Value>(ENV_ITEM_ARGS_JSON)?,
            item_original: load_json_file::<Vec<FileMeta>>(ENV_ITEM_ORIGINAL_JSON)?,
            item_pdf: load_json_file::<Vec<FileMeta>>(ENV_ITEM_PDF_JSON)?,
            item_original_dir: env_var_or_none(ENV_ITEM_ORIGINAL_DIR),
            item_pdf_dir: env_var_or_none(ENV_ITEM_PDF_DIR),
            docspell_url: env_var_or_none(ENV_DSC_DOCSPELL_URL),
            // Presence only: the token itself is dropped right here and
            // never stored or logged.
            session: env_var_or_none(ENV_DSC_SESSION).map(|_| Redacted),
        })
    }
}

/// Load the user-input file named by the first positional argument.
///
/// Missing file or empty content is a soft absence. Content that fails to
/// parse as JSON is kept as raw text; Docspell passes the file through
/// unvalidated, so arbitrary text is an expected input here.
fn load_user_input(path: &Path) -> Result<UserInput, ContextError> {
    let resolved = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };
    if !resolved.is_file() {
        return Ok(UserInput::Absent);
    }
    let content = std::fs::read_to_string(&resolved).map_err(|source| ContextError::FileRead {
        var: "user-input".to_string(),
        path: resolved.clone(),
        source,
    })?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(UserInput::Absent);
    }
    match serde_json::from_str(trimmed) {
        Ok(value) => Ok(UserInput::Json(value)),
        Err(_) => Ok(UserInput::RawText(trimmed.to_string())),
    }
}

/// Load a JSON metadata file named by the given environment variable.
///
/// Unset variable or non-existent path is a soft absence. Malformed JSON
/// is a hard failure: these files are produced by Docspell itself, so a
/// parse error means the contract is broken and the run must not continue
/// with partial data.
fn load_json_file<T: DeserializeOwned>(var: &str) -> Result<Option<T>, ContextError> {
    let Some(path) = env_var_or_none(var).map(PathBuf::from) else {
        return Ok(None);
    };
    if !path.is_file() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path).map_err(|source| ContextError::FileRead {
        var: var.to_string(),
        path: path.clone(),
        source,
    })?;
    let value = serde_json::from_str(&content).map_err(|source| ContextError::JsonParse {
        var: var.to_string(),
        path: path.clone(),
        source,
    })?;
    tracing::debug!(%var, path = %path.display(), "loaded metadata file");
    Ok(Some(value))
}
