//! Core domain models
//!
//! This module defines the parameters of a run, the steps a run is made of,
//! the templates those steps write, and the results they produce.

pub mod config;
pub mod params;
pub mod pipeline;
pub mod questions;
pub mod state;
pub mod step;
pub mod templates;

pub use params::*;
pub use pipeline::*;
pub use state::*;
pub use step::*;
