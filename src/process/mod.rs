//! Process execution for command steps

pub mod error;
pub mod shell;

use async_trait::async_trait;
use std::path::Path;

pub use error::CommandError;
pub use shell::ShellRunner;

/// What happens to a child's stdio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Child shares the terminal
    Inherit,
    /// Child output is discarded
    Ignore,
}

/// Trait for running a command line - allows tests to script outcomes
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` with `cwd` as working directory until it exits
    async fn run(&self, command: &str, cwd: &Path) -> Result<(), CommandError>;
}
