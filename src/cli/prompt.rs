//! Terminal prompts backed by `inquire`

use crate::core::questions::{PromptError, Prompter};
use inquire::{Confirm, InquireError, Select, Text};

/// Asks questions on the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn text(&mut self, message: &str, default: &str) -> Result<String, PromptError> {
        Text::new(message)
            .with_default(default)
            .prompt()
            .map_err(prompt_error)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        Confirm::new(message)
            .with_default(default)
            .prompt()
            .map_err(prompt_error)
    }
}

/// Single choice from a fixed list
pub fn select(message: &str, options: &[&'static str]) -> Result<&'static str, PromptError> {
    Select::new(message, options.to_vec())
        .prompt()
        .map_err(prompt_error)
}

fn prompt_error(err: InquireError) -> PromptError {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            PromptError::Cancelled
        }
        InquireError::NotTTY => PromptError::Failed(
            "input is not a terminal; pass --yes to accept the defaults".to_string(),
        ),
        other => PromptError::Failed(other.to_string()),
    }
}
