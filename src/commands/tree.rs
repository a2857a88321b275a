//! Plain tree command implementation

use super::Command;
use super::validators;
use crate::constants;
use crate::tree::{FsLister, PlainWalker, Tree};
use crate::utils::absolute_path;
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Prints a depth-limited tree of a directory under a header line
pub struct TreeCommand {
    pub root: PathBuf,
    pub max_depth: usize,
    /// Output in JSON format
    pub json: bool,
}

impl Command for TreeCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        validators::validate_max_depth(self.max_depth)?;

        let root = absolute_path(&self.root)?;

        let tree = PlainWalker::new(&FsLister, self.max_depth).walk(&root)?;
        info!(entries = tree.entry_count(), root = %root.display(), "walked directory");

        if !self.json {
            writeln!(
                out,
                "{} {}\n",
                constants::tree::HEADER_PREFIX,
                root.display()
            )?;
        }
        write_tree(out, &tree, self.json)
    }
}

/// Write a walked tree as a diagram or as pretty JSON
pub(crate) fn write_tree(out: &mut dyn Write, tree: &Tree, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(tree)?)?;
        return Ok(());
    }

    for line in tree.render() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
