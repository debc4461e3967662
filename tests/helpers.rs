//! Test utility functions for claude-tools
#![allow(dead_code)]

use claude_tools::core::{
    Feature, FeatureFlags, Pipeline, ProvisioningParameters, ProvisioningResult, RunReport,
};
use claude_tools::execution::Provisioner;
use claude_tools::process::{CommandError, CommandRunner};

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// A command the runner was asked to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub command: String,
    pub cwd: PathBuf,
}

/// Runner that records commands instead of running them
///
/// `npm create vite@latest <name> ...` creates `<name>/src` with the files
/// Vite would generate, so later steps find the directory they expect.
#[derive(Clone, Default)]
pub struct ScriptedRunner {
    fail_on: Option<String>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the first command equal to `command` with exit code 1
    pub fn failing_on(command: &str) -> Self {
        Self {
            fail_on: Some(command.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.command).collect()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, command: &str, cwd: &Path) -> Result<(), CommandError> {
        self.calls.lock().unwrap().push(RecordedCall {
            command: command.to_string(),
            cwd: cwd.to_path_buf(),
        });

        if self.fail_on.as_deref() == Some(command) {
            return Err(CommandError::Exit {
                command: command.to_string(),
                code: 1,
            });
        }

        if let Some(rest) = command.strip_prefix("npm create vite@latest ") {
            let name = rest.split_whitespace().next().unwrap_or_default();
            let src = cwd.join(name).join("src");
            std::fs::create_dir_all(&src).unwrap();
            std::fs::write(src.join("App.jsx"), "// generated by vite\n").unwrap();
            std::fs::write(src.join("index.css"), ":root {}\n").unwrap();
        }

        Ok(())
    }
}

pub fn params(project: &str, component: &str, icons: bool) -> ProvisioningParameters {
    let mut features = FeatureFlags::new();
    if icons {
        features.enable(Feature::Icons);
    }
    ProvisioningParameters::new(project, component, features, false)
}

/// Result of a run inside a fresh temporary directory
pub struct TestRun {
    pub dir: TempDir,
    pub pipeline: Pipeline,
    pub report: RunReport,
    pub runner: ScriptedRunner,
}

impl TestRun {
    pub fn project_root(&self) -> PathBuf {
        self.pipeline.workspace.project_root().to_path_buf()
    }

    /// Read a generated file relative to the project root
    pub fn read(&self, relative: &str) -> String {
        let path = self.project_root().join(relative);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.project_root().join(relative).exists()
    }
}

/// Run the full new-app pipeline in a fresh temporary directory
pub async fn run_new_app(params: &ProvisioningParameters, runner: ScriptedRunner) -> TestRun {
    let dir = tempfile::tempdir().unwrap();
    run_new_app_in(dir, params, runner).await
}

/// Run the full new-app pipeline in `dir`
pub async fn run_new_app_in(
    dir: TempDir,
    params: &ProvisioningParameters,
    runner: ScriptedRunner,
) -> TestRun {
    let pipeline = Pipeline::for_new_app(params, dir.path());
    let provisioner = Provisioner::new(runner.clone());
    let report = provisioner.execute(&pipeline).await;

    TestRun {
        dir,
        pipeline,
        report,
        runner,
    }
}

pub fn assert_completed(run: &TestRun) {
    assert!(
        run.report.result.is_success(),
        "Expected run to complete, got {:?}",
        run.report.result
    );
    assert_eq!(run.report.result.exit_code(), ExitCode::SUCCESS);
    assert_eq!(run.report.outcomes.len(), run.pipeline.len());
    assert!(run.report.outcomes.iter().all(|o| o.success));
}

/// Assert the run stopped at `step_id` and nothing after it ran
pub fn assert_aborted_at(run: &TestRun, step_id: &str) {
    match &run.report.result {
        ProvisioningResult::Aborted {
            step_id: failed, ..
        } => assert_eq!(failed, step_id),
        other => panic!("Expected abort at {}, got {:?}", step_id, other),
    }
    assert_eq!(run.report.result.exit_code(), ExitCode::FAILURE);

    let last = run.report.outcomes.last().expect("no step ran");
    assert_eq!(last.step_id, step_id);
    assert!(!last.success);
    assert!(run.report.outcomes[..run.report.outcomes.len() - 1]
        .iter()
        .all(|o| o.success));
}

/// Assert the executed steps match `expected` exactly
pub fn assert_execution_order(run: &TestRun, expected: &[&str]) {
    assert_eq!(run.report.executed(), expected);
}
