//! Test: Success Chain - a full run writes every file in order

use crate::helpers::*;

/// demo/Widget without icons: every step runs and the entry imports Widget
#[tokio::test]
async fn test_demo_widget_run() {
    let run = run_new_app(&params("demo", "Widget", false), ScriptedRunner::new()).await;

    assert_completed(&run);
    assert_execution_order(
        &run,
        &[
            "scaffold",
            "install-dependencies",
            "install-tailwind",
            "init-tailwind",
            "vite-config",
            "jsconfig",
            "components-json",
            "init-shadcn",
            "add-shadcn-components",
            "component",
            "app-entry",
            "index-css",
        ],
    );

    let entry = run.read("src/App.jsx");
    assert!(entry.contains("import Widget from './components/Widget'"));
    assert!(entry.contains("Welcome to demo"));
}

/// Every file-write step leaves its file behind
#[tokio::test]
async fn test_all_files_written() {
    let run = run_new_app(&params("demo", "Widget", false), ScriptedRunner::new()).await;
    assert_completed(&run);

    for file in [
        "vite.config.js",
        "jsconfig.json",
        "components.json",
        "src/components/Widget.jsx",
        "src/App.jsx",
        "src/index.css",
    ] {
        assert!(run.exists(file), "{} was not written", file);
    }

    assert!(run.read("vite.config.js").contains("'@': path.resolve(__dirname, './src')"));
    assert!(run.read("src/index.css").starts_with("@tailwind base;"));
}

/// Files scaffolded by Vite are replaced by ours
#[tokio::test]
async fn test_generated_files_replace_vite_defaults() {
    let run = run_new_app(&params("demo", "Widget", false), ScriptedRunner::new()).await;
    assert_completed(&run);

    assert!(!run.read("src/App.jsx").contains("generated by vite"));
    assert!(!run.read("src/index.css").contains(":root"));
}

/// Scaffolding runs in the parent directory, everything else in the project
#[tokio::test]
async fn test_command_directories() {
    let run = run_new_app(&params("demo", "Widget", false), ScriptedRunner::new()).await;
    assert_completed(&run);

    let calls = run.runner.calls();
    assert_eq!(calls[0].cwd, run.dir.path());
    for call in &calls[1..] {
        assert_eq!(call.cwd, run.project_root(), "`{}` ran in the wrong directory", call.command);
    }
}

/// Same parameters in fresh directories give byte-identical files
#[tokio::test]
async fn test_runs_are_deterministic() {
    let first = run_new_app(&params("demo", "Widget", true), ScriptedRunner::new()).await;
    let second = run_new_app(&params("demo", "Widget", true), ScriptedRunner::new()).await;
    assert_completed(&first);
    assert_completed(&second);

    for file in [
        "vite.config.js",
        "jsconfig.json",
        "components.json",
        "src/components/Widget.jsx",
        "src/App.jsx",
        "src/index.css",
    ] {
        assert_eq!(first.read(file), second.read(file), "{} differs", file);
    }
    assert_eq!(first.runner.commands(), second.runner.commands());
}

/// Project and component names are taken as given
#[tokio::test]
async fn test_names_are_opaque() {
    let run = run_new_app(&params("my app", "ChatBox", false), ScriptedRunner::new()).await;
    assert_completed(&run);

    assert_eq!(
        run.runner.commands()[0],
        "npm create vite@latest my app -- --template react"
    );
    assert!(run.read("src/components/ChatBox.jsx").contains("export default ChatBox;"));
}
