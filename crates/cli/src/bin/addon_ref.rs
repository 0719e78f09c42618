//! addon-ref - prints the release directory derived from the addon manifest.
//!
//! Release tooling tags the container image and installs the addon under
//! `addons/{name}-{version}`; this binary is the single place that value
//! is derived from, so the tag and the path cannot drift apart.
//!
//! Invariants:
//! - stdout carries exactly the derived directory, nothing else.
//! - A manifest missing its name or version field exits non-zero with no
//!   stdout output.

use addon_context::{AddonRef, ManifestError};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "addon-ref")]
#[command(about = "Derive the addons/{name}-{version} directory from the addon manifest", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the addon manifest
    #[arg(value_name = "MANIFEST", default_value = "docspell-addon.yml")]
    manifest: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    match AddonRef::from_file(&cli.manifest) {
        Ok(addon) => println!("{}", addon.dir()),
        Err(err) => {
            // Same code space as the hello-addon binary: 1 general, 3 manifest.
            let code = match &err {
                ManifestError::MissingField { .. } => 3,
                ManifestError::Read { .. } => 1,
            };
            eprintln!("{:#}", anyhow::Error::new(err));
            std::process::exit(code);
        }
    }
}
