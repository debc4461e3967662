//! Execution state models

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::process::ExitCode;
use std::time::Duration;

/// Result of executing one step
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    /// Zero-based position in the pipeline
    pub index: usize,

    pub step_id: String,

    pub success: bool,

    /// Error detail for failed steps
    pub diagnostic: Option<String>,

    pub started_at: DateTime<Utc>,

    pub finished_at: DateTime<Utc>,
}

impl StepOutcome {
    pub fn succeeded(index: usize, step_id: &str, started_at: DateTime<Utc>) -> Self {
        Self {
            index,
            step_id: step_id.to_string(),
            success: true,
            diagnostic: None,
            started_at,
            finished_at: Utc::now(),
        }
    }

    pub fn failed(
        index: usize,
        step_id: &str,
        diagnostic: String,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            index,
            step_id: step_id.to_string(),
            success: false,
            diagnostic: Some(diagnostic),
            started_at,
            finished_at: Utc::now(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.finished_at
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or_default()
    }
}

/// Terminal value of a provisioning run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ProvisioningResult {
    /// Every step succeeded
    Completed { steps: usize },

    /// A step failed and nothing after it ran
    Aborted {
        /// Zero-based index of the failed step
        step_index: usize,
        step_id: String,
        /// Human-readable failure message
        reason: String,
        /// Underlying error
        detail: String,
        /// Command the user can re-run by hand, for command steps
        manual_command: Option<String>,
    },
}

impl ProvisioningResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ProvisioningResult::Completed { .. })
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Everything recorded about a run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub result: ProvisioningResult,

    /// One outcome per executed step, in order
    pub outcomes: Vec<StepOutcome>,

    pub started_at: DateTime<Utc>,

    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    /// IDs of the steps that ran, in order
    pub fn executed(&self) -> Vec<&str> {
        self.outcomes.iter().map(|o| o.step_id.as_str()).collect()
    }

    pub fn duration(&self) -> Duration {
        self.finished_at
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or_default()
    }
}
