//! Command-line interface for Treecat
//!
//! Main CLI structure and command dispatch. Uses clap for argument parsing;
//! running with no subcommand generates a snapshot of the current directory,
//! which is the common case.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

use commands::check::CheckArgs;
use commands::config::ConfigCommands;
use commands::generate::GenerateArgs;

/// Treecat - Project structure snapshots for sharing and review
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the snapshot report (default)
    Generate(GenerateArgs),
    /// Show the exclusion verdict for one or more paths
    Check(CheckArgs),
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Show version information
    Version,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let output = Output::new(self.verbose, self.quiet);
        let config_path = self.config.as_deref();

        match self.command {
            Some(Commands::Generate(args)) => commands::generate::execute(args, config_path, &output),
            Some(Commands::Check(args)) => commands::check::execute(args, config_path, &output),
            Some(Commands::Config(cmd)) => commands::config::execute(cmd, config_path, &output),
            Some(Commands::Version) => commands::version::execute(&output),
            // No subcommand: snapshot the current directory.
            None => commands::generate::execute(GenerateArgs::default(), config_path, &output),
        }
    }
}
