//! Probe and extraction operations.
//!
//! Reads repository metadata by invoking the version-control tool through a
//! [`CommandRunner`]. All operations are read-only and block until the child
//! process exits.
//!
//! # Reading repository metadata
//!
//! ```no_run
//! use repoinfo::{extract_repository_info, is_repository};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! if is_repository(".") {
//!     if let Some(info) = extract_repository_info(".")? {
//!         println!("{}", info.summary());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use crate::runner::{CommandRunner, GitCli};
use crate::types::RepositoryInfo;
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors from metadata extraction after the probe gate has passed.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The tool could not be launched at all.
    #[error("failed to launch the version-control tool: {0}")]
    Launch(#[from] std::io::Error),

    /// The tool ran but reported a failure exit status.
    #[error("git {command} failed in {path}")]
    CommandFailed { command: String, path: String },
}

pub type ExtractResult<T> = Result<T, ExtractError>;

/// Check whether `path` designates a directory under version control.
///
/// All failure causes (tool absent, path absent, not a repository,
/// permission denied) collapse into `false`. Never errors, no retries.
pub fn is_repository(path: impl AsRef<Path>) -> bool {
    is_repository_with(&GitCli, path.as_ref())
}

/// [`is_repository`] with an injected runner.
pub fn is_repository_with(runner: &dyn CommandRunner, path: &Path) -> bool {
    runner.probe(&["status"], path)
}

/// Extract a [`RepositoryInfo`] snapshot for `path`.
///
/// Returns `Ok(None)` when the path is not a usable repository. Once the
/// probe has passed, any invocation failure propagates as [`ExtractError`];
/// callers should treat that as "metadata could not be read from an
/// apparently valid repository", which is distinct from the `None` case.
pub fn extract_repository_info(path: impl AsRef<Path>) -> ExtractResult<Option<RepositoryInfo>> {
    extract_repository_info_with(&GitCli, path.as_ref())
}

/// [`extract_repository_info`] with an injected runner.
pub fn extract_repository_info_with(
    runner: &dyn CommandRunner,
    path: &Path,
) -> ExtractResult<Option<RepositoryInfo>> {
    if !is_repository_with(runner, path) {
        debug!(path = %path.display(), "not a repository");
        return Ok(None);
    }

    let branches = parse_branches(&run_checked(runner, &["branch", "--list"], path)?);

    // An unborn HEAD means a freshly initialized repository: the log queries
    // below would fail, so the snapshot degenerates to the branch list.
    if !runner.probe(&["rev-parse", "--verify", "HEAD"], path) {
        debug!(path = %path.display(), "repository has no commits");
        return Ok(Some(RepositoryInfo {
            branches,
            latest_commit: String::new(),
            authors: BTreeSet::new(),
        }));
    }

    let latest_commit = run_checked(runner, &["log", "-1", "--pretty=format:%H %s"], path)?
        .trim()
        .to_string();

    let authors = parse_authors(&run_checked(runner, &["log", "--format=%an"], path)?);

    Ok(Some(RepositoryInfo {
        branches,
        latest_commit,
        authors,
    }))
}

fn run_checked(runner: &dyn CommandRunner, args: &[&str], path: &Path) -> ExtractResult<String> {
    let out = runner.run(args, path)?;
    if !out.success {
        return Err(ExtractError::CommandFailed {
            command: args.join(" "),
            path: path.display().to_string(),
        });
    }
    Ok(out.stdout)
}

/// Parse `branch --list` output: strip one leading active-branch marker per
/// line, trim, and drop lines that end up empty. Order is preserved.
fn parse_branches(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| {
            let line = line.trim_start();
            line.strip_prefix('*').unwrap_or(line).trim()
        })
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse one-author-per-line log output into a deduplicated set.
fn parse_authors(raw: &str) -> BTreeSet<String> {
    raw.lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
