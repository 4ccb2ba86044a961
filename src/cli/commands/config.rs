//! Configuration command implementations
//!
//! Commands for managing Treecat configuration.

use anyhow::Result;
use clap::Subcommand;
use std::path::Path;

use crate::cli::Output;
use crate::config::TreecatConfig;

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a default treecat.yml in the current directory
    Init,
    /// Show the effective configuration
    Show,
    /// Validate the configuration
    Validate,
}

pub fn execute(cmd: ConfigCommands, config_path: Option<&str>, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Init => init(output),
        ConfigCommands::Show => show(config_path, output),
        ConfigCommands::Validate => validate(config_path, output),
    }
}

fn init(output: &Output) -> Result<()> {
    let path = Path::new("treecat.yml");
    if path.exists() {
        anyhow::bail!("treecat.yml already exists in this directory");
    }

    TreecatConfig::default().save_to_file(path)?;
    output.success("Created treecat.yml with default settings");
    Ok(())
}

fn show(config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = TreecatConfig::load(config_path)?;

    output.header("Effective configuration");
    output.key_value("Output file:", &config.report.output_file);
    output.key_value("Rule file:", &config.report.rule_file);
    output.key_value(
        "Include contents:",
        &config.report.include_contents.to_string(),
    );
    output.key_value(
        "Max file size (MB):",
        &config.filter.max_file_size_mb.to_string(),
    );
    if !config.filter.extra_skip_dirs.is_empty() {
        output.key_value("Extra skip dirs:", &config.filter.extra_skip_dirs.join(", "));
    }
    if !config.filter.extra_skip_extensions.is_empty() {
        output.key_value(
            "Extra skip extensions:",
            &config.filter.extra_skip_extensions.join(", "),
        );
    }
    Ok(())
}

fn validate(config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = TreecatConfig::load(config_path)?;
    config.validate()?;
    output.success("Configuration is valid");
    Ok(())
}
