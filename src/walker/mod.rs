//! Depth-first directory traversal with pruning
//!
//! Builds the in-memory tree the report is rendered from. The walk is
//! single-threaded and synchronous; the matcher is consulted for every
//! entry before descending, so an excluded directory is never entered and
//! its descendants never appear anywhere downstream.

pub mod filter;

pub use filter::EntryFilter;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::matcher::RuleSet;

/// One file or directory in the snapshot tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    pub is_dir: bool,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn file(name: String) -> Self {
        TreeNode {
            name,
            is_dir: false,
            children: Vec::new(),
        }
    }

    fn directory(name: String) -> Self {
        TreeNode {
            name,
            is_dir: true,
            children: Vec::new(),
        }
    }

    /// Number of files in this subtree, the node itself included.
    pub fn file_count(&self) -> usize {
        if self.is_dir {
            self.children.iter().map(TreeNode::file_count).sum()
        } else {
            1
        }
    }
}

/// Walk `root` and build the snapshot tree, honoring the rule set and the
/// built-in skip heuristics. Directory entries are visited in byte order of
/// their names so the report is stable across runs.
pub fn build_tree(root: &Path, rules: &RuleSet, filter: &EntryFilter) -> Result<TreeNode> {
    let metadata = fs::metadata(root)
        .with_context(|| format!("Failed to read root entry: {}", root.display()))?;

    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());

    if !metadata.is_dir() {
        return Ok(TreeNode::file(name));
    }

    let mut node = TreeNode::directory(name);
    collect_children(root, rules, filter, &mut node)?;
    Ok(node)
}

fn collect_children(
    dir: &Path,
    rules: &RuleSet,
    filter: &EntryFilter,
    node: &mut TreeNode,
) -> Result<()> {
    let reader = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut entries = Vec::new();
    for entry in reader {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "skipping unreadable entry");
            }
        }
    }
    entries.sort_by_key(std::fs::DirEntry::file_name);

    for entry in entries {
        let path = entry.path();
        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping entry without metadata");
                continue;
            }
        };
        let is_dir = metadata.is_dir();

        // Rule file first, then the built-in heuristics.
        if rules.is_excluded(&path, is_dir) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if is_dir {
            if filter.skips_directory(&name) {
                continue;
            }
            let mut child = TreeNode::directory(name);
            collect_children(&path, rules, filter, &mut child)?;
            node.children.push(child);
        } else {
            if filter.skips_file(&name, metadata.len()) || !EntryFilter::is_readable(&path) {
                continue;
            }
            node.children.push(TreeNode::file(name));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TreecatConfig;
    use std::fs;
    use tempfile::TempDir;

    fn default_filter() -> EntryFilter {
        EntryFilter::from_config(&TreecatConfig::default())
    }

    fn child<'a>(node: &'a TreeNode, name: &str) -> Option<&'a TreeNode> {
        node.children.iter().find(|c| c.name == name)
    }

    #[test]
    fn test_builds_sorted_tree() -> Result<()> {
        let dir = TempDir::new()?;
        fs::create_dir(dir.path().join("src"))?;
        fs::write(dir.path().join("src/main.rs"), "fn main() {}")?;
        fs::write(dir.path().join("zeta.txt"), "z")?;
        fs::write(dir.path().join("alpha.txt"), "a")?;

        let rules = RuleSet::compile(std::iter::empty::<&str>(), dir.path());
        let tree = build_tree(dir.path(), &rules, &default_filter())?;

        let names: Vec<&str> = tree.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["alpha.txt", "src", "zeta.txt"]);
        assert!(child(&tree, "src").is_some_and(|n| n.is_dir));
        Ok(())
    }

    #[test]
    fn test_excluded_directory_is_pruned() -> Result<()> {
        let dir = TempDir::new()?;
        fs::create_dir_all(dir.path().join("secret/inner"))?;
        fs::write(dir.path().join("secret/inner/keep.txt"), "data")?;
        fs::write(dir.path().join("visible.txt"), "data")?;

        // The negation can never resurrect a file under a pruned directory.
        let rules = RuleSet::compile(["secret/", "!secret/inner/keep.txt"], dir.path());
        let tree = build_tree(dir.path(), &rules, &default_filter())?;

        assert!(child(&tree, "secret").is_none());
        assert!(child(&tree, "visible.txt").is_some());
        Ok(())
    }

    #[test]
    fn test_negated_file_survives_exclusion() -> Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("debug.tmp"), "x")?;
        fs::write(dir.path().join("keep.tmp"), "x")?;

        let rules = RuleSet::compile(["*.tmp", "!keep.tmp"], dir.path());
        let tree = build_tree(dir.path(), &rules, &default_filter())?;

        assert!(child(&tree, "debug.tmp").is_none());
        assert!(child(&tree, "keep.tmp").is_some());
        Ok(())
    }

    #[test]
    fn test_builtin_directories_skipped() -> Result<()> {
        let dir = TempDir::new()?;
        fs::create_dir(dir.path().join(".git"))?;
        fs::write(dir.path().join(".git/config"), "[core]")?;
        fs::create_dir(dir.path().join("node_modules"))?;
        fs::write(dir.path().join("index.js"), "")?;

        let rules = RuleSet::compile(std::iter::empty::<&str>(), dir.path());
        let tree = build_tree(dir.path(), &rules, &default_filter())?;

        assert!(child(&tree, ".git").is_none());
        assert!(child(&tree, "node_modules").is_none());
        assert!(child(&tree, "index.js").is_some());
        Ok(())
    }

    #[test]
    fn test_directory_only_rule_keeps_same_named_file() -> Result<()> {
        let dir = TempDir::new()?;
        fs::create_dir(dir.path().join("cache"))?;
        fs::write(dir.path().join("cache/blob"), "x")?;
        fs::write(dir.path().join("note"), "x")?;
        fs::write(dir.path().join("cache.txt"), "x")?;

        let rules = RuleSet::compile(["cache/"], dir.path());
        let tree = build_tree(dir.path(), &rules, &default_filter())?;

        assert!(child(&tree, "cache").is_none());
        assert!(child(&tree, "cache.txt").is_some());
        assert!(child(&tree, "note").is_some());
        Ok(())
    }

    #[test]
    fn test_file_count() -> Result<()> {
        let dir = TempDir::new()?;
        fs::create_dir(dir.path().join("a"))?;
        fs::write(dir.path().join("a/one.txt"), "1")?;
        fs::write(dir.path().join("two.txt"), "2")?;

        let rules = RuleSet::compile(std::iter::empty::<&str>(), dir.path());
        let tree = build_tree(dir.path(), &rules, &default_filter())?;
        assert_eq!(tree.file_count(), 2);
        Ok(())
    }

    #[test]
    fn test_root_file_is_a_leaf() -> Result<()> {
        let dir = TempDir::new()?;
        let file = dir.path().join("single.txt");
        fs::write(&file, "data")?;

        let rules = RuleSet::compile(std::iter::empty::<&str>(), dir.path());
        let tree = build_tree(&file, &rules, &default_filter())?;
        assert!(!tree.is_dir);
        assert_eq!(tree.name, "single.txt");
        assert!(tree.children.is_empty());
        Ok(())
    }
}
