//! Release identifier derivation from the addon manifest.
//!
//! Responsibilities:
//! - Extract the `name` and `version` string fields from
//!   `docspell-addon.yml` and derive the `addons/{name}-{version}`
//!   directory used by the release tooling.
//!
//! Does NOT handle:
//! - The manifest format beyond those two fields: the file is scraped as
//!   text so the derivation stays independent of the YAML structure.
//! - Tagging the container image (external release tooling; it must use
//!   the same derived value).
//!
//! Invariants:
//! - The first quoted value after each key wins; matches never span lines.
//! - A missing field is a hard failure: the manifest is the single source
//!   of truth for the release identifier.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"name:\s*["']([^"'\n]+)["']"#).unwrap());
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"version:\s*["']([^"'\n]+)["']"#).unwrap());

/// Errors that can occur while deriving the release identifier.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read addon manifest at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing quoted '{field}:' value in addon manifest")]
    MissingField { field: &'static str },
}

/// Name and version of the addon, as declared in the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonRef {
    pub name: String,
    pub version: String,
}

impl AddonRef {
    /// Extract name and version from the manifest text.
    pub fn parse(manifest: &str) -> Result<Self, ManifestError> {
        let name = first_capture(&NAME_RE, manifest)
            .ok_or(ManifestError::MissingField { field: "name" })?;
        let version = first_capture(&VERSION_RE, manifest)
            .ok_or(ManifestError::MissingField { field: "version" })?;
        Ok(AddonRef { name, version })
    }

    /// Read and parse the manifest file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Directory the release tooling installs this addon under.
    pub fn dir(&self) -> String {
        format!("addons/{}-{}", self.name, self.version)
    }
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
