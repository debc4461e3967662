//! Pipeline domain model
//!
//! A [`Pipeline`] is the full, ordered step list for one run. It is computed
//! up front from the [`ProvisioningParameters`] by [`PipelineBuilder`] and never
//! changes while executing.

use crate::core::{
    params::{Feature, ProvisioningParameters},
    step::{Step, Workspace},
    templates,
};
use std::path::PathBuf;

/// An ordered provisioning plan
#[derive(Debug, Clone)]
pub struct Pipeline {
    /// Project being created
    pub name: String,

    /// Directories the steps resolve against
    pub workspace: Workspace,

    /// Steps in execution order
    pub steps: Vec<Step>,
}

impl Pipeline {
    /// Full plan for a new app created inside `parent`
    pub fn for_new_app(params: &ProvisioningParameters, parent: impl Into<PathBuf>) -> Self {
        PipelineBuilder::new(params, parent)
            .scaffold()
            .tailwind()
            .build_tool_config()
            .ui_library()
            .icon_library()
            .sources()
            .build()
    }

    /// Get a step by ID
    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Step IDs in execution order
    pub fn step_ids(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Builds a pipeline stage by stage
///
/// Each stage appends its steps in order. Stages that depend on a feature
/// flag append nothing when the flag is off.
pub struct PipelineBuilder<'a> {
    params: &'a ProvisioningParameters,
    workspace: Workspace,
    steps: Vec<Step>,
}

impl<'a> PipelineBuilder<'a> {
    pub fn new(params: &'a ProvisioningParameters, parent: impl Into<PathBuf>) -> Self {
        Self {
            params,
            workspace: Workspace::new(parent, params.project_name()),
            steps: Vec::new(),
        }
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Create the Vite React project and install its dependencies
    pub fn scaffold(self) -> Self {
        let name = self.params.project_name().to_string();
        self.step(
            Step::command(
                "scaffold",
                format!("Creating Vite app {}", name),
                format!("npm create vite@latest {} -- --template react", name),
                "Error creating Vite app",
            )
            .in_parent(),
        )
        .step(Step::command(
            "install-dependencies",
            "Installing dependencies",
            "npm install",
            "Error installing dependencies",
        ))
    }

    /// Install and initialize Tailwind CSS
    pub fn tailwind(self) -> Self {
        self.step(Step::command(
            "install-tailwind",
            "Installing Tailwind CSS",
            "npm install -D tailwindcss postcss autoprefixer",
            "Error installing Tailwind CSS",
        ))
        .step(Step::command(
            "init-tailwind",
            "Initializing Tailwind CSS",
            "npx tailwindcss init -p",
            "Error initializing Tailwind CSS",
        ))
    }

    /// Vite config with the `@` alias plus the matching path and UI configs
    pub fn build_tool_config(self) -> Self {
        self.step(Step::write_file(
            "vite-config",
            "vite.config.js",
            templates::VITE_CONFIG,
        ))
        .step(Step::write_file(
            "jsconfig",
            "jsconfig.json",
            templates::JSCONFIG,
        ))
        .step(Step::write_file(
            "components-json",
            "components.json",
            templates::COMPONENTS_JSON,
        ))
    }

    /// Initialize shadcn-ui and add the components the template uses
    pub fn ui_library(self) -> Self {
        self.step(Step::command(
            "init-shadcn",
            "Initializing shadcn-ui",
            "npx shadcn-ui@latest init",
            "Error initializing shadcn-ui",
        ))
        .step(Step::command(
            "add-shadcn-components",
            "Installing shadcn-ui components",
            "npx shadcn-ui@latest add card button input",
            "Error adding shadcn-ui components",
        ))
    }

    /// Install lucide-react, only when icons are enabled
    pub fn icon_library(self) -> Self {
        if !self.params.has(Feature::Icons) {
            return self;
        }
        self.step(Step::command(
            "install-lucide",
            "Installing lucide-react",
            "npm install lucide-react",
            "Error installing lucide-react",
        ))
    }

    /// Main component, entry file and stylesheet
    pub fn sources(self) -> Self {
        let params = self.params;
        let component_path = PathBuf::from("src")
            .join("components")
            .join(format!("{}.jsx", params.component_name()));

        let component_body = templates::component(params);
        let entry_body = templates::app_entry(params);

        self.step(Step::write_file("component", component_path, component_body))
            .step(Step::write_file(
                "app-entry",
                PathBuf::from("src").join("App.jsx"),
                entry_body,
            ))
            .step(Step::write_file(
                "index-css",
                PathBuf::from("src").join("index.css"),
                templates::INDEX_CSS,
            ))
    }

    pub fn build(self) -> Pipeline {
        Pipeline {
            name: self.params.project_name().to_string(),
            workspace: self.workspace,
            steps: self.steps,
        }
    }
}
