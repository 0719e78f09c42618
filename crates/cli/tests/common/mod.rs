//! Shared test utilities for hello-addon integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic command factory that prevents dotenv loading and
//!   host environment leakage.
//!
//! Invariants:
//! - All integration tests using this helper are hermetic by default: no
//!   Docspell variable from the host environment reaches the child.

use assert_cmd::Command;

/// Environment variables the addon reads; cleared for hermeticity.
#[allow(dead_code)]
pub const ADDON_VARS: [&str; 14] = [
    "ADDON_DIR",
    "TMP_DIR",
    "TMPDIR",
    "OUTPUT_DIR",
    "CACHE_DIR",
    "ITEM_DIR",
    "ITEM_DATA_JSON",
    "ITEM_ARGS_JSON",
    "ITEM_ORIGINAL_JSON",
    "ITEM_PDF_JSON",
    "ITEM_ORIGINAL_DIR",
    "ITEM_PDF_DIR",
    "DSC_DOCSPELL_URL",
    "DSC_SESSION",
];

/// Returns a hermetic `hello-addon` command for integration testing.
#[allow(dead_code)]
pub fn addon_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("hello-addon");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for var in ADDON_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a hermetic `addon-ref` command for integration testing.
#[allow(dead_code)]
pub fn addon_ref_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("addon-ref");
    cmd.env("DOTENV_DISABLED", "1");
    cmd
}
