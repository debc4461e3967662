//! Pipeline execution engine

pub mod engine;
pub mod executor;

pub use engine::{EventHandler, ProvisionEvent, Provisioner};
pub use executor::{StepError, StepExecutor};
