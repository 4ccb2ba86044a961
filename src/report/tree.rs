//! Box-drawing tree renderer

use std::io::{self, Write};

use crate::walker::TreeNode;

/// Render the snapshot tree. The root prints bare; directories are wrapped
/// in square brackets; children hang off `├── `/`└── ` connectors with
/// `│   ` continuation bars.
pub fn render_tree<W: Write>(node: &TreeNode, out: &mut W) -> io::Result<()> {
    render_node(node, "", true, out)
}

fn render_node<W: Write>(node: &TreeNode, prefix: &str, is_last: bool, out: &mut W) -> io::Result<()> {
    let connector = if prefix.is_empty() {
        String::new()
    } else if is_last {
        format!("{prefix}└── ")
    } else {
        format!("{prefix}├── ")
    };

    if node.is_dir {
        writeln!(out, "{connector}[{}]", node.name)?;
    } else {
        writeln!(out, "{connector}{}", node.name)?;
    }

    let child_prefix = if prefix.is_empty() {
        "    ".to_string()
    } else if is_last {
        format!("{prefix}    ")
    } else {
        format!("{prefix}│   ")
    };

    let last = node.children.len().saturating_sub(1);
    for (index, child) in node.children.iter().enumerate() {
        render_node(child, &child_prefix, index == last, out)?;
    }

    Ok(())
}
