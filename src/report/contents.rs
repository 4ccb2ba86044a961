//! Tagged file-contents block

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::walker::TreeNode;

/// Emit every file in the tree as a `<name>…</name>` block, depth-first in
/// tree order. `parent` is the directory containing `node` on disk; the
/// root node is therefore rendered with the snapshot root's parent.
pub fn render_contents<W: Write>(node: &TreeNode, parent: &Path, out: &mut W) -> Result<()> {
    let full_path = parent.join(&node.name);

    if !node.is_dir {
        // The file may have vanished between the walk and the render.
        if !full_path.exists() {
            return Ok(());
        }

        match fs::read(&full_path) {
            Ok(content) => {
                writeln!(out, "<{}>", node.name)?;
                out.write_all(&content)?;
                writeln!(out, "\n</{}>", node.name)?;
            }
            Err(err) => {
                tracing::warn!(path = %full_path.display(), error = %err, "could not read file, leaving it out of the report");
            }
        }
        return Ok(());
    }

    for child in &node.children {
        render_contents(child, &full_path, out)
            .with_context(|| format!("Failed to render contents under {}", full_path.display()))?;
    }

    Ok(())
}
