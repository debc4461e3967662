//! CLI output formatting

use crate::{
    core::{Pipeline, ProvisioningResult},
    execution::ProvisionEvent,
};
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static SPINNER: Emoji<'_, '_> = Emoji("⏳ ", "~ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "! ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");

/// Create a spinner for a running step
pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// `[n/total] description`
pub fn format_step_label(index: usize, total: usize, description: &str) -> String {
    format!(
        "{} {}",
        style(format!("[{}/{}]", index + 1, total)).dim(),
        description
    )
}

/// Lines printed when a step fails
///
/// The underlying error is only shown when verbose; the manual command is
/// always shown so the user can pick up where the run stopped.
pub fn format_failure(
    message: &str,
    detail: &str,
    manual_command: Option<&str>,
    verbose: bool,
) -> Vec<String> {
    let mut lines = vec![format!("{}{}", CROSS, style(message).red())];

    if verbose {
        lines.push(format!("   {}", style(detail).red().dim()));
    }
    if let Some(command) = manual_command {
        lines.push(
            style(format!("Command to run manually: {}", command))
                .yellow()
                .to_string(),
        );
    }

    lines
}

/// Numbered step listing for `--dry-run`
pub fn format_plan(pipeline: &Pipeline) -> String {
    let mut out = format!(
        "{}Planned steps for {} (in {}):\n",
        INFO,
        style(&pipeline.name).bold(),
        style(pipeline.workspace.parent().display()).dim()
    );

    for (i, step) in pipeline.steps.iter().enumerate() {
        out.push_str(&format!("  {:>2}. {}\n", i + 1, step.summary()));
    }

    out
}

/// Plan as pretty JSON
pub fn format_plan_json(pipeline: &Pipeline) -> serde_json::Result<String> {
    let data = serde_json::json!({
        "project": pipeline.name,
        "project_root": pipeline.workspace.project_root(),
        "steps": pipeline.steps,
    });
    serde_json::to_string_pretty(&data)
}

/// Closing banner after a successful run
pub fn format_next_steps(cd_target: &str, elapsed: Duration) -> String {
    format!(
        "\n{}{} {}\n\n{}\n{}\n{}\n\n{}",
        CHECK,
        style("New Claude app created successfully!").green(),
        style(format!("({})", format_duration(elapsed))).dim(),
        style("Next steps:").yellow(),
        style(format!("1. cd {}", cd_target)).cyan(),
        style("2. npm run dev").cyan(),
        style("Happy coding!").yellow()
    )
}

pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

/// Renders provisioning events on the terminal
///
/// Quiet runs get one spinner per step. Verbose runs let child output through,
/// so they print plain progress lines instead of a spinner.
pub struct StepReporter {
    verbose: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl StepReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            spinner: Mutex::new(None),
        }
    }

    fn clear_spinner(&self) {
        if let Ok(mut current) = self.spinner.lock() {
            if let Some(spinner) = current.take() {
                spinner.finish_and_clear();
            }
        }
    }

    pub fn handle(&self, event: &ProvisionEvent) {
        match event {
            ProvisionEvent::PipelineStarted {
                project,
                total_steps,
            } => {
                println!(
                    "{}Creating a new Claude app: {} {}",
                    ROCKET,
                    style(project).bold(),
                    style(format!("({} steps)", total_steps)).dim()
                );
            }
            ProvisionEvent::StepStarted {
                index,
                total,
                description,
                ..
            } => {
                let label = format_step_label(*index, *total, description);
                if self.verbose {
                    println!("{}{}", SPINNER, label);
                } else if let Ok(mut current) = self.spinner.lock() {
                    *current = Some(create_spinner(label));
                }
            }
            ProvisionEvent::StepCompleted {
                index,
                total,
                description,
                duration,
                ..
            } => {
                self.clear_spinner();
                println!(
                    "{}{} {}",
                    CHECK,
                    format_step_label(*index, *total, description),
                    style(format_duration(*duration)).dim()
                );
            }
            ProvisionEvent::StepFailed {
                message,
                detail,
                manual_command,
                ..
            } => {
                self.clear_spinner();
                for line in format_failure(message, detail, manual_command.as_deref(), self.verbose)
                {
                    eprintln!("{}", line);
                }
            }
            ProvisionEvent::PipelineFinished { result } => {
                self.clear_spinner();
                if let ProvisioningResult::Aborted { step_index, .. } = result {
                    eprintln!(
                        "{}Stopped at step {}; later steps were not run",
                        WARN,
                        step_index + 1
                    );
                }
            }
        }
    }
}
