//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not load the context (see `addon-context`).
//!
//! Invariants:
//! - The invocation contract with Docspell is a single optional positional
//!   argument; adding required flags or subcommands would break it.

use clap::Parser;
use clap::builder::TypedValueParser as _;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hello-addon")]
#[command(about = "Example Docspell addon that logs its invocation context", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the user-input file supplied through the Docspell web UI
    // The default PathBuf parser rejects empty values; an empty argument is
    // valid here and means "no user input" (filtered in main).
    #[arg(
        value_name = "USER_INPUT_FILE",
        value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from)
    )]
    pub user_input: Option<PathBuf>,
}
