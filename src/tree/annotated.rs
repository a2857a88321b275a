//! Walker for the annotated tree printer

use super::{Entry, Lister, Tree, TreeNode};
use crate::config::Annotations;
use crate::constants;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Walks every visible entry with no depth limit, attaching annotations
/// looked up by path relative to the root.
///
/// Listing errors are not recovered: the first failure aborts the walk.
pub struct AnnotatedWalker<'a> {
    lister: &'a dyn Lister,
    annotations: &'a Annotations,
}

impl<'a> AnnotatedWalker<'a> {
    pub fn new(lister: &'a dyn Lister, annotations: &'a Annotations) -> Self {
        Self {
            lister,
            annotations,
        }
    }

    pub fn walk(&self, root: &Path) -> Result<Tree> {
        let children = self.walk_dir(root, "")?;
        Ok(Tree {
            root: root.display().to_string(),
            permission_denied: false,
            children,
        })
    }

    fn walk_dir(&self, dir: &Path, relative: &str) -> Result<Vec<TreeNode>> {
        debug!(dir = %dir.display(), "listing directory");
        let entries = self
            .lister
            .list(dir)
            .with_context(|| format!("Failed to list directory '{}'", dir.display()))?;

        let mut nodes = Vec::new();
        for entry in entries.into_iter().filter(is_visible) {
            let relative_path = if relative.is_empty() {
                entry.name.clone()
            } else {
                format!("{relative}/{}", entry.name)
            };
            let child_dir = dir.join(&entry.name);

            let mut node = TreeNode::new(entry);
            node.annotation = self.annotations.get(&relative_path).map(str::to_string);
            if node.is_dir {
                node.children = self.walk_dir(&child_dir, &relative_path)?;
            }
            nodes.push(node);
        }

        Ok(nodes)
    }
}

fn is_visible(entry: &Entry) -> bool {
    !entry.is_hidden() && !constants::annotate::EXCLUDED_NAMES.contains(&entry.name.as_str())
}
