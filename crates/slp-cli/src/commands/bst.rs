//! BST command - render persistent search trees

use anyhow::Result;
use slp_runtime::bst::{Tree, DEMO_SEQUENCES};
use std::io::Write;

/// Render the tree built from `keys`, or the three demo trees when empty
///
/// Each tree is followed by a blank line.
pub fn run(keys: &[String], out: &mut dyn Write) -> Result<()> {
    if keys.is_empty() {
        for (label, sequence) in DEMO_SEQUENCES {
            let tree = Tree::from_keys(sequence.iter().copied());
            tracing::debug!(label, len = tree.len(), depth = tree.depth(), "demo tree");
            writeln!(out, "{}", tree)?;
        }
    } else {
        let tree = Tree::from_keys(keys.iter().cloned());
        tracing::debug!(len = tree.len(), depth = tree.depth(), "tree");
        writeln!(out, "{}", tree)?;
    }
    Ok(())
}
