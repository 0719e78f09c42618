//! Exit codes for scripting and the host invocation.
//!
//! Responsibilities:
//! - Define structured exit codes that distinguish the hard failure modes.
//! - Map ContextError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 0 always means a valid instruction object was written to
//!   stdout; any non-zero code means stdout carries no JSON.

use addon_context::ContextError;

/// Structured exit codes for the addon binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - instruction object written to stdout.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A metadata file Docspell pointed at contained malformed JSON.
    ///
    /// This means the invocation contract is broken; re-running without a
    /// fixed environment will fail the same way.
    InvalidJson = 2,

    /// The addon manifest is missing its name or version field.
    ///
    /// Used by the `addon-ref` binary, which keeps the same code space.
    #[allow(dead_code)]
    InvalidManifest = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ContextError> for ExitCode {
    fn from(err: &ContextError) -> Self {
        match err {
            ContextError::JsonParse { .. } => ExitCode::InvalidJson,
            ContextError::FileRead { .. } => ExitCode::GeneralError,
            ContextError::DotenvParse { .. }
            | ContextError::DotenvIo { .. }
            | ContextError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ContextError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(ctx_err) = cause.downcast_ref::<ContextError>() {
                return ExitCode::from(ctx_err);
            }
        }
        ExitCode::GeneralError
    }
}
