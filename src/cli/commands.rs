//! CLI command definitions

use crate::core::{
    questions::{Answer, Answers, COMPONENT_NAME, PROJECT_NAME},
    Feature,
};
use clap::Args;
use std::path::PathBuf;

/// Create a new app
#[derive(Debug, Args, Clone, Default)]
pub struct NewAppCommand {
    /// Project name (skips the question)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Main component name (skips the question)
    #[arg(long)]
    pub component: Option<String>,

    /// Enable an optional feature (skips its question)
    #[arg(long = "with", value_enum)]
    pub with: Vec<FeatureArg>,

    /// Accept the default for every question not given on the command line
    #[arg(short, long)]
    pub yes: bool,

    /// Directory to create the project in [default: current directory]
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Print the planned steps without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Print the plan as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,
}

impl NewAppCommand {
    pub fn features(&self) -> Vec<Feature> {
        self.with.iter().copied().map(Feature::from).collect()
    }

    /// Answers already given on the command line
    pub fn presets(&self) -> Answers {
        let mut answers = Answers::new();

        if let Some(name) = &self.name {
            answers.insert(PROJECT_NAME, Answer::Text(name.clone()));
        }
        if let Some(component) = &self.component {
            answers.insert(COMPONENT_NAME, Answer::Text(component.clone()));
        }
        for feature in self.features() {
            answers.insert(feature.name(), Answer::Confirm(true));
        }

        answers
    }
}

/// Feature argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FeatureArg {
    /// lucide-react icons
    Icons,
}

impl From<FeatureArg> for Feature {
    fn from(arg: FeatureArg) -> Self {
        match arg {
            FeatureArg::Icons => Feature::Icons,
        }
    }
}
