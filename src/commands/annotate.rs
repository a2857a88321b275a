//! Annotated tree command implementation

use super::Command;
use super::tree::write_tree;
use crate::config::Annotations;
use crate::tree::{AnnotatedWalker, FsLister};
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Prints the full tree of a directory with annotation labels
pub struct AnnotateCommand {
    pub root: PathBuf,
    /// YAML file replacing the built-in annotation table
    pub annotations: Option<PathBuf>,
    /// Output in JSON format
    pub json: bool,
}

impl AnnotateCommand {
    fn load_annotations(&self) -> Result<Annotations> {
        match &self.annotations {
            Some(path) => Annotations::load(path),
            None => Ok(Annotations::builtin()),
        }
    }
}

impl Command for AnnotateCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let annotations = self.load_annotations()?;

        let tree = AnnotatedWalker::new(&FsLister, &annotations).walk(&self.root)?;
        info!(
            entries = tree.entry_count(),
            annotations = annotations.len(),
            "walked directory"
        );

        write_tree(out, &tree, self.json)
    }
}
