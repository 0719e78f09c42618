//! hello-addon - Example Docspell addon.
//!
//! Responsibilities:
//! - Load the invocation context Docspell provides (argument, environment
//!   variables, metadata files).
//! - Log the full context to stderr for inspection.
//! - Emit the instruction object for Docspell on stdout.
//!
//! Does NOT handle:
//! - Context loading and rendering rules (see `crates/context`).
//! - Release identifier derivation (see the `addon-ref` binary).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide
//!   clap defaults.
//! - stdout carries exactly one JSON line; everything else (report,
//!   tracing output, errors) goes to stderr.

mod args;
mod error;

use std::io::Write;

use addon_context::{AddonContext, report};
use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = addon_context::load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    // stdout is the protocol channel Docspell parses, so the fmt layer
    // must write to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // An empty argument means "no user input", same as no argument at all.
    let user_input_file = cli.user_input.filter(|p| !p.as_os_str().is_empty());

    let ctx = AddonContext::load(user_input_file)?;
    tracing::debug!("addon context loaded");

    let stderr = std::io::stderr();
    report::write_report(&mut stderr.lock(), &ctx)?;

    // Instructions for Docspell; the empty object means "apply no changes".
    // A real addon would branch on the context and emit commands here.
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, &serde_json::json!({}))?;
    writeln!(stdout)?;

    Ok(())
}
