//! Step executor - runs individual steps against a workspace

use crate::{
    core::{Step, StepAction, Workspace},
    process::{CommandError, CommandRunner},
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Why a step failed
#[derive(Debug, Error)]
pub enum StepError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Executes a single step
pub struct StepExecutor<R> {
    runner: R,
}

impl<R: CommandRunner> StepExecutor<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Execute a step; paths resolve against `workspace`
    pub async fn execute(&self, step: &Step, workspace: &Workspace) -> Result<(), StepError> {
        match &step.action {
            StepAction::Command {
                command, location, ..
            } => {
                let cwd = workspace.resolve(*location);
                self.runner.run(command, cwd).await?;
            }
            StepAction::WriteFile { path, contents } => {
                let target = workspace.target(path);
                write_file(&target, contents).await?;
                debug!("Wrote {} bytes to {}", contents.len(), target.display());
            }
        }

        Ok(())
    }
}

/// Write `contents` to `target`, creating missing parent directories
async fn write_file(target: &Path, contents: &str) -> Result<(), StepError> {
    let io_error = |source| StepError::Write {
        path: target.to_path_buf(),
        source,
    };

    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
    }
    tokio::fs::write(target, contents).await.map_err(io_error)
}
