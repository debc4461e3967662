//! claude-tools - scaffold a Claude-ready React app

pub mod cli;
pub mod core;
pub mod execution;
pub mod process;

// Re-export commonly used types
pub use crate::core::{
    Feature, FeatureFlags, Pipeline, ProvisioningParameters, ProvisioningResult, RunReport, Step,
    StepOutcome,
};
pub use crate::execution::{ProvisionEvent, Provisioner, StepError};
pub use crate::process::{CommandError, CommandRunner, OutputMode, ShellRunner};
