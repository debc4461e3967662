//! Command error types

use thiserror::Error;

/// Error types for running external commands
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with code {code}")]
    Exit { command: String, code: i32 },

    #[error("`{command}` was terminated by a signal")]
    Terminated { command: String },
}

impl CommandError {
    /// The command line that failed
    pub fn command(&self) -> &str {
        match self {
            CommandError::Spawn { command, .. }
            | CommandError::Exit { command, .. }
            | CommandError::Terminated { command } => command,
        }
    }
}
