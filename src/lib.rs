//! # Treecat - Project Structure Snapshots
//!
//! Treecat walks a project directory and writes a single report file: a
//! box-drawing tree of the project layout followed by the contents of every
//! included file in tagged blocks. Which entries make it into the report is
//! decided by a gitignore-style exclusion engine with ordered,
//! last-match-wins rules.
//!
//! ## Quick Start
//!
//! ```bash
//! # Install treecat
//! cargo install treecat
//!
//! # Snapshot the current directory into project_structure.txt
//! treecat
//!
//! # Ask why a path is (not) in the report
//! treecat check target/debug src/main.rs
//! ```

pub mod cli;
pub mod config;
pub mod matcher;
pub mod report;
pub mod walker;

pub use cli::{Cli, Output};
pub use config::TreecatConfig;
pub use matcher::{Rule, RuleSet};

/// Result type alias for Treecat operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
