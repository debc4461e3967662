//! Test: Failure Handling - the first failing step stops the run

use crate::helpers::*;
use claude_tools::core::ProvisioningResult;
use std::process::ExitCode;

/// A failed install stops the run before any file is written
#[tokio::test]
async fn test_install_failure_aborts() {
    let run = run_new_app(
        &params("demo", "Widget", false),
        ScriptedRunner::failing_on("npm install"),
    )
    .await;

    assert_aborted_at(&run, "install-dependencies");
    assert_execution_order(&run, &["scaffold", "install-dependencies"]);
    assert!(!run.report.result.is_success());
    assert_eq!(run.report.result.exit_code(), ExitCode::FAILURE);

    assert_eq!(
        run.runner.commands(),
        vec![
            "npm create vite@latest demo -- --template react".to_string(),
            "npm install".to_string(),
        ]
    );
    assert!(!run.exists("vite.config.js"));
    assert!(!run.exists("src/components/Widget.jsx"));
}

/// The abort carries the message and the command to re-run by hand
#[tokio::test]
async fn test_abort_reports_manual_command() {
    let run = run_new_app(
        &params("demo", "Widget", false),
        ScriptedRunner::failing_on("npx shadcn-ui@latest init"),
    )
    .await;

    assert_aborted_at(&run, "init-shadcn");
    match &run.report.result {
        ProvisioningResult::Aborted {
            step_index,
            reason,
            detail,
            manual_command,
            ..
        } => {
            assert_eq!(*step_index, 7);
            assert_eq!(reason, "Error initializing shadcn-ui");
            assert!(detail.contains("npx shadcn-ui@latest init"));
            assert_eq!(manual_command.as_deref(), Some("npx shadcn-ui@latest init"));
        }
        other => panic!("Expected abort, got {:?}", other),
    }

    // Files from earlier steps stay in place
    assert!(run.exists("vite.config.js"));
    assert!(run.exists("components.json"));
    assert!(!run.runner.commands().iter().any(|c| c.contains(" add ")));
}

/// A scaffold failure stops everything, including the project directory
#[tokio::test]
async fn test_scaffold_failure() {
    let run = run_new_app(
        &params("demo", "Widget", true),
        ScriptedRunner::failing_on("npm create vite@latest demo -- --template react"),
    )
    .await;

    assert_aborted_at(&run, "scaffold");
    assert_eq!(run.runner.commands().len(), 1);
    assert!(!run.project_root().exists());
}

/// A file that cannot be written aborts the run like a failed command
#[tokio::test]
async fn test_write_failure_aborts() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should go makes the write fail
    std::fs::create_dir_all(dir.path().join("demo").join("vite.config.js")).unwrap();

    let run = run_new_app_in(dir, &params("demo", "Widget", false), ScriptedRunner::new()).await;

    assert_aborted_at(&run, "vite-config");
    match &run.report.result {
        ProvisioningResult::Aborted {
            reason,
            manual_command,
            ..
        } => {
            assert_eq!(reason, "Error writing vite.config.js");
            assert!(manual_command.is_none());
        }
        other => panic!("Expected abort, got {:?}", other),
    }

    assert!(!run
        .runner
        .commands()
        .iter()
        .any(|c| c.starts_with("npx shadcn-ui")));
    assert!(!run.exists("jsconfig.json"));
}

/// The last step can fail too; the result is still an abort
#[tokio::test]
async fn test_failure_on_last_command() {
    let run = run_new_app(
        &params("demo", "Widget", true),
        ScriptedRunner::failing_on("npm install lucide-react"),
    )
    .await;

    assert_aborted_at(&run, "install-lucide");
    assert!(!run.exists("src/components/Widget.jsx"));
    assert_eq!(run.report.outcomes.len(), 10);
}
