//! Step domain model

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Directory a command runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    /// The directory the project is created in
    Parent,
    /// The project directory itself
    ProjectRoot,
}

/// What a step does
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StepAction {
    /// Run a shell command to completion; a non-zero exit fails the step
    Command {
        command: String,
        failure_message: String,
        location: Location,
    },
    /// Write a file below the project root, creating parent directories
    WriteFile {
        path: PathBuf,
        #[serde(skip_serializing)]
        contents: String,
    },
}

/// A single step in a provisioning pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Unique step identifier
    pub id: String,

    /// Human-readable label shown while the step runs
    pub description: String,

    #[serde(flatten)]
    pub action: StepAction,
}

impl Step {
    /// A command run in the project root
    pub fn command(
        id: impl Into<String>,
        description: impl Into<String>,
        command: impl Into<String>,
        failure_message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            action: StepAction::Command {
                command: command.into(),
                failure_message: failure_message.into(),
                location: Location::ProjectRoot,
            },
        }
    }

    /// A file write; `path` is relative to the project root
    pub fn write_file(
        id: impl Into<String>,
        path: impl Into<PathBuf>,
        contents: impl Into<String>,
    ) -> Self {
        let path = path.into();
        Self {
            id: id.into(),
            description: format!("Writing {}", path.display()),
            action: StepAction::WriteFile {
                path,
                contents: contents.into(),
            },
        }
    }

    /// Run this command in the parent directory instead of the project root
    pub fn in_parent(mut self) -> Self {
        if let StepAction::Command { location, .. } = &mut self.action {
            *location = Location::Parent;
        }
        self
    }

    pub fn is_command(&self) -> bool {
        matches!(self.action, StepAction::Command { .. })
    }

    /// The literal command line, for users re-running a failed step by hand
    pub fn manual_command(&self) -> Option<&str> {
        match &self.action {
            StepAction::Command { command, .. } => Some(command),
            StepAction::WriteFile { .. } => None,
        }
    }

    /// Message shown when the step fails
    pub fn failure_message(&self) -> String {
        match &self.action {
            StepAction::Command {
                failure_message, ..
            } => failure_message.clone(),
            StepAction::WriteFile { path, .. } => format!("Error writing {}", path.display()),
        }
    }

    /// One-line summary used by plan listings
    pub fn summary(&self) -> String {
        match &self.action {
            StepAction::Command {
                command, location, ..
            } => match location {
                Location::Parent => format!("run `{}` (in parent directory)", command),
                Location::ProjectRoot => format!("run `{}`", command),
            },
            StepAction::WriteFile { path, .. } => format!("write {}", path.display()),
        }
    }
}

/// Directories a run works against
///
/// Every step resolves its paths through this value; the process working
/// directory is never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    parent: PathBuf,
    project_root: PathBuf,
}

impl Workspace {
    pub fn new(parent: impl Into<PathBuf>, project_name: &str) -> Self {
        let parent = parent.into();
        let project_root = parent.join(project_name);
        Self {
            parent,
            project_root,
        }
    }

    pub fn parent(&self) -> &Path {
        &self.parent
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn resolve(&self, location: Location) -> &Path {
        match location {
            Location::Parent => &self.parent,
            Location::ProjectRoot => &self.project_root,
        }
    }

    /// Absolute target of a file relative to the project root
    pub fn target(&self, relative: &Path) -> PathBuf {
        self.project_root.join(relative)
    }
}
