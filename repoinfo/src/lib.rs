//! Repository metadata extraction through the system `git` binary.
//!
//! This crate answers two questions about a filesystem path:
//!
//! - is it a directory under version control? ([`is_repository`])
//! - what are its branches, latest commit, and authors?
//!   ([`extract_repository_info`])
//!
//! The probe never errors: every failure cause (tool absent, path absent,
//! not a repository, permission denied) collapses into `false`, and
//! extraction returns `Ok(None)` for the same cases. Once the probe has
//! passed, an extraction failure is unexpected and propagates as
//! [`ExtractError`].
//!
//! # Reading repository metadata
//!
//! ```no_run
//! use repoinfo::extract_repository_info;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! match extract_repository_info(".")? {
//!     Some(info) => println!("{}", info.summary()),
//!     None => println!("not a version-controlled directory"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! All tool invocations go through the narrow [`CommandRunner`] capability,
//! so tests can script tool output instead of requiring a real `git` binary
//! and on-disk fixtures.
//!
//! All operations are **read-only** (no repository state modification).

pub mod operations;
pub mod presentation;
pub mod runner;
pub mod types;

pub use operations::{
    extract_repository_info, extract_repository_info_with, is_repository, is_repository_with,
    ExtractError, ExtractResult,
};
pub use presentation::{render_text, to_json, to_toml, RepoReport, ReportError};
pub use runner::{CommandRunner, GitCli, RunOutput};
pub use types::RepositoryInfo;
