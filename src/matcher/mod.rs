//! Gitignore-style exclusion engine
//!
//! This module decides, for every filesystem entry the walker encounters,
//! whether that entry should be left out of the generated report. Rules are
//! compiled once from a rule file into an ordered [`RuleSet`]; evaluation is
//! a pure function of the compiled rules, the candidate path, and its
//! directory flag, so a single `RuleSet` can be shared freely.

pub mod rule;
pub mod ruleset;

// Re-export main types for easier access
pub use rule::Rule;
pub use ruleset::RuleSet;
