use anyhow::{Context, Result};
use claude_tools::cli::commands::NewAppCommand;
use claude_tools::cli::output::*;
use claude_tools::cli::prompt::{self, InquirePrompter};
use claude_tools::cli::{Cli, Command};
use claude_tools::core::config::ToolConfig;
use claude_tools::core::questions::{questionnaire, Answers};
use claude_tools::core::{Pipeline, ProvisioningResult};
use claude_tools::execution::Provisioner;
use claude_tools::process::ShellRunner;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const CREATE_APP: &str = "Create a new Claude app";
const EXIT: &str = "Exit";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::from_args();

    let result = match init_logging(cli.verbose) {
        Ok(()) => match &cli.command {
            Command::NewApp(cmd) => new_app(cmd, &cli).await,
            Command::Menu => menu(&cli).await,
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}{}", CROSS, style(format!("{:#}", e)).red());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    // Step failures are reported on the terminal; logs only add detail
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")
}

async fn menu(cli: &Cli) -> Result<ExitCode> {
    println!("{}", style("Welcome to Claude Tools!").blue());

    let choice = prompt::select("What would you like to do?", &[CREATE_APP, EXIT])?;
    if choice == CREATE_APP {
        new_app(&NewAppCommand::default(), cli).await
    } else {
        println!("Goodbye!");
        Ok(ExitCode::SUCCESS)
    }
}

async fn new_app(cmd: &NewAppCommand, cli: &Cli) -> Result<ExitCode> {
    let config = ToolConfig::load(cli.config.as_deref())?;

    let parent = match &cmd.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to get current dir")?,
    };

    let questions = questionnaire(&config.defaults);
    let presets = cmd.presets();
    if !cmd.yes && questions.iter().any(|q| !presets.contains(&q.name)) {
        println!("{}", style("Welcome to Claude Tools App Creator!").blue());
    }

    let answers = Answers::collect(&questions, presets, cmd.yes, &mut InquirePrompter)?;
    let params = answers.into_parameters(&config.defaults, cli.verbose);
    let pipeline = Pipeline::for_new_app(&params, parent);

    if cmd.dry_run {
        if cmd.json {
            println!("{}", format_plan_json(&pipeline)?);
        } else {
            print!("{}", format_plan(&pipeline));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut provisioner = Provisioner::new(ShellRunner::for_parameters(&params));
    let reporter = StepReporter::new(params.verbose());
    provisioner.add_event_handler(move |event| reporter.handle(event));

    let report = provisioner.execute(&pipeline).await;

    if let ProvisioningResult::Completed { .. } = report.result {
        let cd_target = match cmd.dir {
            Some(_) => pipeline.workspace.project_root().display().to_string(),
            None => pipeline.name.clone(),
        };
        println!("{}", format_next_steps(&cd_target, report.duration()));
    }

    Ok(report.result.exit_code())
}
