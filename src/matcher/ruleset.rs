//! Ordered rule collection and verdict evaluation
//!
//! A [`RuleSet`] is compiled once before the walk and is read-only
//! afterwards. Evaluation is last-match-wins: every rule is consulted in
//! file order and the most recent match decides, so later rules can negate
//! or re-exclude paths matched by earlier, broader ones.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

use super::rule::Rule;

/// Ordered, immutable collection of compiled rules plus the base directory
/// used to relativize absolute candidate paths.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    base: PathBuf,
}

impl RuleSet {
    /// Compile rule lines into a rule set. Blank lines and `#` comments are
    /// skipped; everything else is accepted (malformed wildcard text
    /// degrades to literal matching, it never fails compilation).
    pub fn compile<I, S>(lines: I, base: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = lines
            .into_iter()
            .filter_map(|line| {
                let line = line.as_ref().trim();
                if line.is_empty() || line.starts_with('#') {
                    return None;
                }
                Some(Rule::parse(line))
            })
            .collect();

        RuleSet {
            rules,
            base: base.into(),
        }
    }

    /// Load a rule file. A missing file is created empty and yields an empty
    /// rule set; a file unreadable for any other reason is a fatal
    /// configuration error.
    pub fn load(path: &Path, base: impl Into<PathBuf>) -> Result<Self> {
        if !path.exists() {
            fs::write(path, b"")
                .with_context(|| format!("Failed to create rule file: {}", path.display()))?;
            return Ok(Self::compile(std::iter::empty::<&str>(), base));
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule file: {}", path.display()))?;

        Ok(Self::compile(content.lines(), base))
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Decide whether `path` is excluded from the report.
    ///
    /// The decision is a left-to-right fold over the rules: directory-only
    /// rules are skipped for files, a matching rule overwrites the verdict
    /// with the inverse of its negation flag, and no rule short-circuits. A
    /// path that cannot be expressed relative to the base is never excluded
    /// (fail-open); this function is total and never panics.
    pub fn is_excluded(&self, path: &Path, is_dir: bool) -> bool {
        if self.rules.is_empty() {
            return false;
        }

        let Some(rel) = self.relativize(path) else {
            tracing::debug!(
                path = %path.display(),
                base = %self.base.display(),
                "path not relative to rule base; treating as not excluded"
            );
            return false;
        };

        let mut verdict = false;
        for rule in &self.rules {
            if rule.matches(&rel, is_dir) {
                verdict = !rule.is_negated();
            }
        }
        verdict
    }

    /// Express `path` as a slash-separated path relative to the base.
    /// Returns `None` when the path escapes the base or cannot be resolved.
    fn relativize(&self, path: &Path) -> Option<String> {
        let rel = if path.is_absolute() {
            path.strip_prefix(&self.base).ok()?
        } else {
            path
        };

        let mut parts: Vec<String> = Vec::new();
        for component in rel.components() {
            match component {
                Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
                Component::CurDir => {}
                Component::ParentDir => {
                    // A `..` that climbs out of the base is unresolvable.
                    if parts.pop().is_none() {
                        return None;
                    }
                }
                Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        Some(parts.join("/"))
    }
}
