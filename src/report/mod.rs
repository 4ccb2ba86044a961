//! Report assembly
//!
//! Writes the output file: the box-drawing tree inside a
//! `<Project_Structure>` envelope followed by the tagged file contents
//! inside a `<File_Contents>` envelope.

pub mod contents;
pub mod tree;

pub use contents::render_contents;
pub use tree::render_tree;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::walker::TreeNode;

/// Write the complete report for a tree rooted at `root` to `out_path`.
/// With `include_contents` off, only the structure envelope is written.
pub fn write_report(
    tree: &TreeNode,
    root: &Path,
    out_path: &Path,
    include_contents: bool,
) -> Result<()> {
    let file = File::create(out_path)
        .with_context(|| format!("Failed to create output file: {}", out_path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "<Project_Structure>")?;
    render_tree(tree, &mut out)?;
    writeln!(out, "</Project_Structure>")?;

    if include_contents {
        let parent = root.parent().unwrap_or_else(|| Path::new(""));
        writeln!(out, "<File_Contents>")?;
        render_contents(tree, parent, &mut out)?;
        writeln!(out, "</File_Contents>")?;
    }

    out.flush().context("Failed to flush output file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TreecatConfig;
    use crate::matcher::RuleSet;
    use crate::walker::{self, EntryFilter};
    use std::fs;
    use tempfile::TempDir;

    fn generate(dir: &TempDir, include_contents: bool) -> Result<String> {
        let rules = RuleSet::compile(std::iter::empty::<&str>(), dir.path());
        let filter = EntryFilter::from_config(&TreecatConfig::default());
        let tree = walker::build_tree(dir.path(), &rules, &filter)?;

        let out_path = dir.path().join("report.out");
        write_report(&tree, dir.path(), &out_path, include_contents)?;
        Ok(fs::read_to_string(out_path)?)
    }

    #[test]
    fn test_envelopes_in_order() -> Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("file.txt"), "content")?;

        let report = generate(&dir, true)?;
        let structure_open = report.find("<Project_Structure>").expect("structure open");
        let structure_close = report.find("</Project_Structure>").expect("structure close");
        let contents_open = report.find("<File_Contents>").expect("contents open");
        let contents_close = report.find("</File_Contents>").expect("contents close");
        assert!(structure_open < structure_close);
        assert!(structure_close < contents_open);
        assert!(contents_open < contents_close);
        assert!(report.contains("└── file.txt"));
        assert!(report.contains("<file.txt>\ncontent\n</file.txt>"));
        Ok(())
    }

    #[test]
    fn test_tree_only_report() -> Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("file.txt"), "content")?;

        let report = generate(&dir, false)?;
        assert!(report.contains("</Project_Structure>"));
        assert!(!report.contains("<File_Contents>"));
        assert!(!report.contains("<file.txt>"));
        Ok(())
    }
}
