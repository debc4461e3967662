//! Main execution engine - drives a provisioning run from first step to last

use crate::{
    core::{Pipeline, ProvisioningParameters, ProvisioningResult, RunReport, StepOutcome},
    execution::StepExecutor,
    process::CommandRunner,
};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Events that can occur during a provisioning run
#[derive(Debug, Clone)]
pub enum ProvisionEvent {
    PipelineStarted {
        project: String,
        total_steps: usize,
    },
    StepStarted {
        index: usize,
        total: usize,
        step_id: String,
        description: String,
    },
    StepCompleted {
        index: usize,
        total: usize,
        step_id: String,
        description: String,
        duration: Duration,
    },
    StepFailed {
        index: usize,
        total: usize,
        step_id: String,
        message: String,
        detail: String,
        manual_command: Option<String>,
    },
    PipelineFinished {
        result: ProvisioningResult,
    },
}

/// Type for event handlers
pub type EventHandler = Arc<dyn Fn(&ProvisionEvent) + Send + Sync>;

/// Runs pipelines step by step, stopping at the first failure
pub struct Provisioner<R> {
    executor: StepExecutor<R>,
    event_handlers: Vec<EventHandler>,
}

impl<R: CommandRunner> Provisioner<R> {
    pub fn new(runner: R) -> Self {
        Self {
            executor: StepExecutor::new(runner),
            event_handlers: Vec::new(),
        }
    }

    pub fn runner(&self) -> &R {
        self.executor.runner()
    }

    /// Add an event handler
    pub fn add_event_handler<F>(&mut self, handler: F)
    where
        F: Fn(&ProvisionEvent) + Send + Sync + 'static,
    {
        self.event_handlers.push(Arc::new(handler));
    }

    /// Emit an event to all handlers
    fn emit_event(&self, event: ProvisionEvent) {
        for handler in &self.event_handlers {
            handler(&event);
        }
    }

    /// Plan and run a new app inside `parent`
    pub async fn run(
        &self,
        params: &ProvisioningParameters,
        parent: impl Into<PathBuf>,
    ) -> ProvisioningResult {
        let pipeline = Pipeline::for_new_app(params, parent);
        self.execute(&pipeline).await.result
    }

    /// Execute every step of `pipeline` in order
    ///
    /// The first failing step ends the run; no later step is started.
    pub async fn execute(&self, pipeline: &Pipeline) -> RunReport {
        let started_at = Utc::now();
        let total = pipeline.len();
        let mut outcomes = Vec::with_capacity(total);

        info!(
            "Starting provisioning: {} ({} steps) in {}",
            pipeline.name,
            total,
            pipeline.workspace.parent().display()
        );
        self.emit_event(ProvisionEvent::PipelineStarted {
            project: pipeline.name.clone(),
            total_steps: total,
        });

        for (index, step) in pipeline.steps.iter().enumerate() {
            debug!("Step {}/{}: {}", index + 1, total, step.summary());
            self.emit_event(ProvisionEvent::StepStarted {
                index,
                total,
                step_id: step.id.clone(),
                description: step.description.clone(),
            });

            let step_started = Utc::now();
            match self.executor.execute(step, &pipeline.workspace).await {
                Ok(()) => {
                    let outcome = StepOutcome::succeeded(index, &step.id, step_started);
                    self.emit_event(ProvisionEvent::StepCompleted {
                        index,
                        total,
                        step_id: step.id.clone(),
                        description: step.description.clone(),
                        duration: outcome.duration(),
                    });
                    outcomes.push(outcome);
                }
                Err(e) => {
                    let detail = e.to_string();
                    warn!("Step {} failed: {}", step.id, detail);

                    outcomes.push(StepOutcome::failed(
                        index,
                        &step.id,
                        detail.clone(),
                        step_started,
                    ));

                    let manual_command = step.manual_command().map(str::to_string);
                    self.emit_event(ProvisionEvent::StepFailed {
                        index,
                        total,
                        step_id: step.id.clone(),
                        message: step.failure_message(),
                        detail: detail.clone(),
                        manual_command: manual_command.clone(),
                    });

                    let result = ProvisioningResult::Aborted {
                        step_index: index,
                        step_id: step.id.clone(),
                        reason: step.failure_message(),
                        detail,
                        manual_command,
                    };
                    return self.finish(result, outcomes, started_at);
                }
            }
        }

        self.finish(ProvisioningResult::Completed { steps: total }, outcomes, started_at)
    }

    fn finish(
        &self,
        result: ProvisioningResult,
        outcomes: Vec<StepOutcome>,
        started_at: chrono::DateTime<Utc>,
    ) -> RunReport {
        info!("Provisioning finished: {:?}", result);
        self.emit_event(ProvisionEvent::PipelineFinished {
            result: result.clone(),
        });

        RunReport {
            result,
            outcomes,
            started_at,
            finished_at: Utc::now(),
        }
    }
}
