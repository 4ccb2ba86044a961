//! Exclusion verdict command
//!
//! Evaluates the compiled rule set against explicit paths, the same way the
//! walker does during generation. Follows the check-ignore convention: the
//! exit status is zero when at least one path is excluded.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use serde::Serialize;
use std::env;
use std::path::PathBuf;

use crate::cli::Output;
use crate::config::TreecatConfig;
use crate::matcher::RuleSet;

#[derive(Args)]
pub struct CheckArgs {
    /// Paths to evaluate against the rule file
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: CheckFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum CheckFormat {
    /// Human-readable text output
    Text,
    /// JSON format
    Json,
}

#[derive(Serialize)]
struct Verdict {
    path: String,
    is_dir: bool,
    excluded: bool,
}

pub fn execute(args: CheckArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = TreecatConfig::load(config_path)?;
    config.validate()?;

    let base = env::current_dir().context("Failed to get current directory")?;
    let rules = RuleSet::load(&base.join(&config.report.rule_file), &base)?;
    output.verbose(&format!("Loaded {} exclusion rules", rules.len()));

    let verdicts: Vec<Verdict> = args
        .paths
        .iter()
        .map(|path| {
            // Fail-open on stat errors: a path we cannot inspect is treated
            // as a file, never as an error.
            let is_dir = std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false);
            Verdict {
                path: path.display().to_string(),
                is_dir,
                excluded: rules.is_excluded(path, is_dir),
            }
        })
        .collect();

    match args.format {
        CheckFormat::Json => println!("{}", serde_json::to_string_pretty(&verdicts)?),
        CheckFormat::Text => {
            for verdict in &verdicts {
                let label = if verdict.excluded {
                    style("excluded").red()
                } else {
                    style("included").green()
                };
                println!("{}  {}", label, verdict.path);
            }
        }
    }

    if !verdicts.iter().any(|v| v.excluded) {
        std::process::exit(1);
    }
    Ok(())
}
