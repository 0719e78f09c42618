//! Addon-side view of a Docspell addon invocation.
//!
//! This crate implements the contract between Docspell and an addon
//! process: loading the invocation context from environment variables and
//! JSON metadata files, rendering it to a diagnostic stream, and deriving
//! the release identifier from the addon manifest.

mod context;
mod error;
mod item;
mod loader;
pub mod manifest;
pub mod report;

pub use context::{AddonContext, Redacted, UserInput};
pub use error::ContextError;
pub use item::{Attachment, EntityRef, FileMeta, ItemData};
pub use loader::{env_var_or_none, load_dotenv};
pub use manifest::{AddonRef, ManifestError};
