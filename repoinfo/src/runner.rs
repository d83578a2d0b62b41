//! External-process capability for version-control invocations.
//!
//! Every interaction with the tool goes through the [`CommandRunner`] trait
//! so tests can substitute scripted output for a real `git` binary on disk.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Captured result of a single tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    /// Whether the process reported a success exit status.
    pub success: bool,
    /// Captured standard output, lossily decoded as UTF-8.
    pub stdout: String,
}

/// Runs the version-control tool in a given working directory.
pub trait CommandRunner {
    /// Run the tool with `args`, capturing standard output.
    ///
    /// Errors only when the process cannot be launched at all; a non-success
    /// exit status is reported through [`RunOutput::success`].
    fn run(&self, args: &[&str], cwd: &Path) -> io::Result<RunOutput>;

    /// Run the tool with `args`, discarding all output streams.
    ///
    /// Launch failures and non-success exits both collapse to `false`.
    fn probe(&self, args: &[&str], cwd: &Path) -> bool {
        self.run(args, cwd).map(|out| out.success).unwrap_or(false)
    }
}

/// Production runner that spawns the system `git` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for GitCli {
    fn run(&self, args: &[&str], cwd: &Path) -> io::Result<RunOutput> {
        debug!(?args, cwd = %cwd.display(), "running git");
        let output = Command::new("git").args(args).current_dir(cwd).output()?;
        Ok(RunOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }

    // Streams are nulled, not captured: an unread pipe buffer must never
    // block the child.
    fn probe(&self, args: &[&str], cwd: &Path) -> bool {
        Command::new("git")
            .args(args)
            .current_dir(cwd)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success())
    }
}
