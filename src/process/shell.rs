//! Shell command runner - runs each step command through the system shell

use crate::core::ProvisioningParameters;
use crate::process::{CommandError, CommandRunner, OutputMode};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

#[cfg(windows)]
const SHELL: (&str, &str) = ("cmd", "/C");
#[cfg(not(windows))]
const SHELL: (&str, &str) = ("sh", "-c");

/// Runs command lines with `sh -c` (`cmd /C` on Windows)
#[derive(Debug, Clone)]
pub struct ShellRunner {
    output: OutputMode,
}

impl ShellRunner {
    pub fn new(output: OutputMode) -> Self {
        Self { output }
    }

    /// Inherit stdio when verbose, discard it otherwise
    pub fn for_verbosity(verbose: bool) -> Self {
        Self::new(if verbose {
            OutputMode::Inherit
        } else {
            OutputMode::Ignore
        })
    }

    /// Runner matching the verbosity of a run
    pub fn for_parameters(params: &ProvisioningParameters) -> Self {
        Self::for_verbosity(params.verbose())
    }

    pub fn output(&self) -> OutputMode {
        self.output
    }

    fn stdio(&self) -> Stdio {
        match self.output {
            OutputMode::Inherit => Stdio::inherit(),
            OutputMode::Ignore => Stdio::null(),
        }
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    /// Run `command` in `cwd` and wait for it to exit
    ///
    /// # Errors
    /// Returns `CommandError` if:
    /// - The shell cannot be spawned (including a missing `cwd`)
    /// - The command exits with a non-zero status
    /// - The command is killed by a signal
    async fn run(&self, command: &str, cwd: &Path) -> Result<(), CommandError> {
        let (shell, flag) = SHELL;
        debug!("Running `{}` in {}", command, cwd.display());

        let status = Command::new(shell)
            .arg(flag)
            .arg(command)
            .current_dir(cwd)
            .stdin(self.stdio())
            .stdout(self.stdio())
            .stderr(self.stdio())
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|source| CommandError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(CommandError::Exit {
                command: command.to_string(),
                code,
            }),
            None => Err(CommandError::Terminated {
                command: command.to_string(),
            }),
        }
    }
}
