//! Command-line interface

pub mod commands;
pub mod output;
pub mod prompt;

use clap::{Parser, Subcommand};
use commands::NewAppCommand;
use std::ffi::OsString;
use std::path::PathBuf;

/// Scaffold a Claude-ready React app
#[derive(Debug, Parser, Clone)]
#[command(name = "claude-tools")]
#[command(version)]
#[command(about = "Scaffold a Claude-ready React app with Vite, Tailwind CSS and shadcn-ui", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Show tool output and error details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Create a new app
    NewApp(NewAppCommand),

    /// Choose what to do from an interactive menu
    Menu,
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}
