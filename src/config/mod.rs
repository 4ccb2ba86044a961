//! Configuration management for Treecat
//!
//! Handles loading, parsing, and validating Treecat configuration from YAML
//! files. Configuration is found in the working directory or any parent;
//! every field has a default so the tool runs with no config file at all.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for Treecat
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TreecatConfig {
    /// Report generation settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Built-in skip heuristics settings
    #[serde(default)]
    pub filter: FilterConfig,
}

/// Report-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// File the report is written to
    pub output_file: String,

    /// Exclusion rule file, gitignore-style
    pub rule_file: String,

    /// Whether the file-contents block is written after the tree
    pub include_contents: bool,
}

/// Skip heuristics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Maximum file size to inline, in megabytes
    pub max_file_size_mb: u64,

    /// Directory names skipped in addition to the built-in list
    pub extra_skip_dirs: Vec<String>,

    /// File extensions skipped in addition to the built-in list
    pub extra_skip_extensions: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_file: "project_structure.txt".to_string(),
            rule_file: ".treecatignore".to_string(),
            include_contents: true,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 50,
            extra_skip_dirs: vec![],
            extra_skip_extensions: vec![],
        }
    }
}

impl TreecatConfig {
    /// Load configuration from an explicit path, or from a discovered
    /// `treecat.yml` / `.treecat.yml`, or fall back to defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(Path::new(path)),
            None => match Self::find_config_file() {
                Some(found) => Self::load_from_file(&found),
                None => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: TreecatConfig = serde_yml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yml::to_string(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Find configuration file in current directory or parent directories
    pub fn find_config_file() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let config_path = current.join("treecat.yml");
            if config_path.exists() {
                return Some(config_path);
            }

            let config_path = current.join(".treecat.yml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.report.output_file.trim().is_empty() {
            anyhow::bail!("Report output file name cannot be empty");
        }

        if self.report.rule_file.trim().is_empty() {
            anyhow::bail!("Rule file name cannot be empty");
        }

        if self.report.output_file.contains('/') || self.report.rule_file.contains('/') {
            anyhow::bail!("Report and rule file names must be plain file names, not paths");
        }

        if self.filter.max_file_size_mb == 0 {
            anyhow::bail!("Maximum file size cannot be 0");
        }

        Ok(())
    }
}
