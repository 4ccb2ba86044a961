//! Snapshot generation command
//!
//! Compiles the rule file, walks the target directory, and writes the
//! report. This is the default command when treecat is invoked bare.

use anyhow::{Context, Result};
use clap::Args;
use std::env;
use std::path::PathBuf;

use crate::cli::Output;
use crate::config::TreecatConfig;
use crate::matcher::RuleSet;
use crate::report;
use crate::walker::{self, EntryFilter};

#[derive(Args, Default)]
pub struct GenerateArgs {
    /// Directory to snapshot (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Write the report to this file instead of the configured name
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip the file-contents block and write the tree only
    #[arg(long)]
    pub tree_only: bool,
}

pub fn execute(args: GenerateArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = TreecatConfig::load(config_path)?;
    config.validate()?;

    let root = match &args.path {
        Some(path) => path
            .canonicalize()
            .with_context(|| format!("Snapshot root not found: {}", path.display()))?,
        None => env::current_dir().context("Failed to get current directory")?,
    };

    let rule_path = root.join(&config.report.rule_file);
    let rules = RuleSet::load(&rule_path, &root)?;
    output.verbose(&format!(
        "Loaded {} exclusion rules from {}",
        rules.len(),
        rule_path.display()
    ));

    let filter = EntryFilter::from_config(&config);
    let tree = walker::build_tree(&root, &rules, &filter)?;
    output.verbose(&format!("{} files selected for the report", tree.file_count()));

    let out_path = args
        .output
        .unwrap_or_else(|| root.join(&config.report.output_file));
    let include_contents = config.report.include_contents && !args.tree_only;
    report::write_report(&tree, &root, &out_path, include_contents)?;

    if include_contents {
        output.success(&format!(
            "Project structure and file contents written to {}",
            out_path.display()
        ));
    } else {
        output.success(&format!("Project structure written to {}", out_path.display()));
    }

    Ok(())
}
