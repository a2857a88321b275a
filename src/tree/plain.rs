//! Walker for the plain tree printer

use super::{Entry, Lister, Tree, TreeNode};
use crate::constants;
use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Walks up to `max_depth` levels below the root, skipping excluded names
/// and hidden entries. A directory that cannot be listed for lack of
/// permission is marked instead of aborting the walk.
pub struct PlainWalker<'a> {
    lister: &'a dyn Lister,
    max_depth: usize,
}

impl<'a> PlainWalker<'a> {
    pub fn new(lister: &'a dyn Lister, max_depth: usize) -> Self {
        Self { lister, max_depth }
    }

    pub fn walk(&self, root: &Path) -> Result<Tree> {
        let (children, permission_denied) = self.walk_dir(root, 0)?;
        Ok(Tree {
            root: root.display().to_string(),
            permission_denied,
            children,
        })
    }

    /// Returns the listed children and whether the listing was refused
    fn walk_dir(&self, dir: &Path, depth: usize) -> Result<(Vec<TreeNode>, bool)> {
        if depth >= self.max_depth {
            return Ok((Vec::new(), false));
        }

        debug!(dir = %dir.display(), depth, "listing directory");
        let entries = match self.lister.list(dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                warn!(dir = %dir.display(), "permission denied");
                return Ok((Vec::new(), true));
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to list directory '{}'", dir.display()));
            }
        };

        let mut nodes = Vec::new();
        for entry in entries.into_iter().filter(is_listed) {
            let child_dir = dir.join(&entry.name);
            let mut node = TreeNode::new(entry);
            if node.is_dir {
                let (children, denied) = self.walk_dir(&child_dir, depth + 1)?;
                node.children = children;
                node.permission_denied = denied;
            }
            nodes.push(node);
        }

        Ok((nodes, false))
    }
}

fn is_listed(entry: &Entry) -> bool {
    let name = entry.name.as_str();
    if constants::tree::EXCLUDED_NAMES.contains(&name) {
        return false;
    }
    !entry.is_hidden() || constants::tree::ALLOWED_HIDDEN.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::FsLister;
    use crate::tree::fake::FakeLister;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_exclusions_and_allowed_hidden() {
        let lister = FakeLister::default().with_dir(
            "root",
            vec![
                Entry::file(".env"),
                Entry::file(".env.local"),
                Entry::file(".gitignore"),
                Entry::dir(".git"),
                Entry::dir("__pycache__"),
                Entry::dir("build"),
                Entry::file("dist"),
                Entry::file("main.py"),
            ],
        );

        let tree = PlainWalker::new(&lister, 4).walk(Path::new("root")).unwrap();

        assert_eq!(
            tree.render(),
            vec!["├── .env", "├── .env.local", "└── main.py"]
        );
    }

    #[test]
    fn test_directories_at_max_depth_are_not_listed() {
        let lister = FakeLister::default()
            .with_dir("r", vec![Entry::dir("a")])
            .with_dir("r/a", vec![Entry::dir("b")])
            .with_dir("r/a/b", vec![Entry::file("too-deep.txt")]);

        let tree = PlainWalker::new(&lister, 2).walk(Path::new("r")).unwrap();

        assert_eq!(tree.render(), vec!["└── a", "    └── b"]);
    }

    #[test]
    fn test_zero_depth_prints_nothing() {
        let lister = FakeLister::default().with_dir("r", vec![Entry::file("a")]);

        let tree = PlainWalker::new(&lister, 0).walk(Path::new("r")).unwrap();

        assert!(tree.render().is_empty());
    }

    #[test]
    fn test_permission_denied_reported_once_and_siblings_continue() {
        let lister = FakeLister::default()
            .with_dir("root", vec![Entry::dir("a"), Entry::dir("locked"), Entry::dir("z")])
            .with_dir("root/a", vec![Entry::file("one.txt")])
            .with_dir("root/z", vec![Entry::file("two.txt")])
            .with_denied("root/locked");

        let tree = PlainWalker::new(&lister, 4).walk(Path::new("root")).unwrap();
        let lines = tree.render();

        assert_eq!(
            lines,
            vec![
                "├── a",
                "│   └── one.txt",
                "├── locked",
                "│       [Permission Denied]",
                "└── z",
                "    └── two.txt",
            ]
        );
        assert_eq!(
            lines.iter().filter(|l| l.contains("[Permission Denied]")).count(),
            1
        );
    }

    #[test]
    fn test_permission_denied_on_root() {
        let lister = FakeLister::default().with_denied("root");

        let tree = PlainWalker::new(&lister, 4).walk(Path::new("root")).unwrap();

        assert!(tree.permission_denied);
        assert_eq!(tree.render(), vec!["    [Permission Denied]"]);
    }

    #[test]
    fn test_other_io_errors_propagate() {
        let lister = FakeLister::default()
            .with_dir("root", vec![Entry::dir("bad")])
            .with_broken("root/bad");

        let err = PlainWalker::new(&lister, 4)
            .walk(Path::new("root"))
            .unwrap_err();

        assert!(err.to_string().contains("root/bad"));
    }

    #[test]
    fn test_walk_file_root_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("README.md");
        fs::write(&file, "").unwrap();

        let err = PlainWalker::new(&FsLister, 4).walk(&file).unwrap_err();

        assert!(err.to_string().contains("Failed to list directory"));
    }

    #[test]
    fn test_walk_real_directory_counts_entries() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("src").join("nested")).unwrap();
        fs::create_dir_all(root.join(".venv").join("lib")).unwrap();
        fs::write(root.join("src").join("app.py"), "").unwrap();
        fs::write(root.join("src").join("nested").join("deep.py"), "").unwrap();
        fs::write(root.join(".env"), "").unwrap();

        let tree = PlainWalker::new(&FsLister, constants::tree::DEFAULT_MAX_DEPTH)
            .walk(root)
            .unwrap();

        assert_eq!(tree.entry_count(), 5);
        assert_eq!(
            tree.render(),
            vec![
                "├── .env",
                "└── src",
                "    ├── app.py",
                "    └── nested",
                "        └── deep.py",
            ]
        );
    }
}
