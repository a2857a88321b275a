//! Directory traversal and tree rendering shared by both printers
//!
//! A walk turns a directory into a [`Tree`] of [`TreeNode`]s; rendering is a
//! separate pass so the same walk can be printed as a diagram or as JSON.

pub mod annotated;
pub mod plain;

pub use annotated::AnnotatedWalker;
pub use plain::PlainWalker;

use crate::constants;
use serde::Serialize;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

const BRANCH: &str = "├──";
const LAST_BRANCH: &str = "└──";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// A single directory entry as seen by a walker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
}

impl Entry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    /// Whether the entry follows the dot-prefix hidden convention
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Source of directory listings
///
/// Implementations return the immediate children of a directory sorted by
/// file name. Errors keep their [`io::ErrorKind`] so walkers can tell a
/// permission problem apart from other failures.
pub trait Lister {
    fn list(&self, dir: &Path) -> io::Result<Vec<Entry>>;
}

/// Lists the real filesystem. Symbolic links are reported as non-directories
/// so walkers never follow them.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLister;

impl Lister for FsLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<Entry>> {
        if !std::fs::metadata(dir)?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("'{}' is not a directory", dir.display()),
            ));
        }

        let mut entries = Vec::new();
        for result in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = result.map_err(io::Error::from)?;
            entries.push(Entry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.file_type().is_dir(),
            });
        }

        Ok(entries)
    }
}

/// A node of a rendered tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub name: String,
    pub is_dir: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
    /// Set when the directory could not be listed
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub permission_denied: bool,
}

impl TreeNode {
    pub fn new(entry: Entry) -> Self {
        Self {
            name: entry.name,
            is_dir: entry.is_dir,
            annotation: None,
            children: Vec::new(),
            permission_denied: false,
        }
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }
}

/// The result of walking one root directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tree {
    pub root: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub permission_denied: bool,
    pub children: Vec<TreeNode>,
}

impl Tree {
    /// Number of entries the diagram prints, excluding permission markers
    pub fn entry_count(&self) -> usize {
        self.children.iter().map(TreeNode::count).sum()
    }

    /// Render the diagram, one string per output line
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.permission_denied {
            lines.push(permission_denied_line(""));
        }
        render_level(&self.children, "", &mut lines);
        lines
    }
}

fn render_level(nodes: &[TreeNode], prefix: &str, lines: &mut Vec<String>) {
    for (index, node) in nodes.iter().enumerate() {
        let is_last = index + 1 == nodes.len();
        let connector = if is_last { LAST_BRANCH } else { BRANCH };

        let mut line = format!("{prefix}{connector} {}", node.name);
        if let Some(note) = &node.annotation {
            line.push_str("  ");
            line.push_str(note);
        }
        lines.push(line);

        let child_prefix = format!(
            "{prefix}{}",
            if is_last { SPACE_INDENT } else { PIPE_INDENT }
        );
        if node.permission_denied {
            lines.push(permission_denied_line(&child_prefix));
        }
        render_level(&node.children, &child_prefix, lines);
    }
}

fn permission_denied_line(prefix: &str) -> String {
    format!(
        "{prefix}{SPACE_INDENT}{}",
        constants::tree::PERMISSION_DENIED
    )
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn leaf(name: &str) -> TreeNode {
        TreeNode::new(Entry::file(name))
    }

    fn branch(name: &str, children: Vec<TreeNode>) -> TreeNode {
        let mut node = TreeNode::new(Entry::dir(name));
        node.children = children;
        node
    }

    fn tree(children: Vec<TreeNode>) -> Tree {
        Tree {
            root: ".".to_string(),
            permission_denied: false,
            children,
        }
    }

    #[test]
    fn test_render_connectors_and_indentation() {
        let tree = tree(vec![
            branch("src", vec![leaf("lib.rs"), leaf("main.rs")]),
            branch("tests", vec![leaf("cli.rs")]),
            leaf("zeta.txt"),
        ]);

        assert_eq!(
            tree.render(),
            vec![
                "├── src",
                "│   ├── lib.rs",
                "│   └── main.rs",
                "├── tests",
                "│   └── cli.rs",
                "└── zeta.txt",
            ]
        );
    }

    #[test]
    fn test_render_last_directory_uses_blank_indent() {
        let tree = tree(vec![leaf("a"), branch("b", vec![leaf("c")])]);

        assert_eq!(tree.render(), vec!["├── a", "└── b", "    └── c"]);
    }

    #[test]
    fn test_render_annotation_appended_after_two_spaces() {
        let mut node = branch("lib", vec![]);
        node.annotation = Some("⭐⭐⭐ CRITICAL".to_string());
        let tree = tree(vec![node, leaf("other")]);

        assert_eq!(tree.render(), vec!["├── lib  ⭐⭐⭐ CRITICAL", "└── other"]);
    }

    #[test]
    fn test_render_permission_denied_marker() {
        let mut locked = branch("locked", vec![]);
        locked.permission_denied = true;
        let tree = tree(vec![locked, leaf("open")]);

        assert_eq!(
            tree.render(),
            vec!["├── locked", "│       [Permission Denied]", "└── open"]
        );
    }

    #[test]
    fn test_render_root_permission_denied() {
        let tree = Tree {
            root: "/secret".to_string(),
            permission_denied: true,
            children: vec![],
        };

        assert_eq!(tree.render(), vec!["    [Permission Denied]"]);
    }

    #[test]
    fn test_entry_count_matches_rendered_lines() {
        let tree = tree(vec![
            branch("a", vec![leaf("1"), branch("b", vec![leaf("2")])]),
            leaf("c"),
        ]);

        assert_eq!(tree.entry_count(), 5);
        assert_eq!(tree.render().len(), tree.entry_count());
    }

    #[test]
    fn test_json_skips_empty_fields() {
        let tree = tree(vec![leaf("readme.md")]);
        let json = serde_json::to_value(&tree).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "root": ".",
                "children": [{ "name": "readme.md", "is_dir": false }]
            })
        );
    }

    #[test]
    fn test_fs_lister_sorts_and_flags_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp_dir.path().join("c")).unwrap();
        fs::write(temp_dir.path().join("c").join("nested.txt"), "n").unwrap();

        let entries = FsLister.list(temp_dir.path()).unwrap();

        assert_eq!(
            entries,
            vec![Entry::file("a.txt"), Entry::file("b.txt"), Entry::dir("c")]
        );
    }

    #[test]
    fn test_fs_lister_missing_directory_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = FsLister.list(&temp_dir.path().join("missing"));

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_fs_lister_regular_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("README.md");
        fs::write(&file, "# readme").unwrap();

        let result = FsLister.list(&file);

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotADirectory);
    }

    #[cfg(unix)]
    #[test]
    fn test_fs_lister_does_not_follow_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(temp_dir.path().join("real"), temp_dir.path().join("link"))
            .unwrap();

        let entries = FsLister.list(temp_dir.path()).unwrap();

        assert_eq!(entries, vec![Entry::file("link"), Entry::dir("real")]);
    }
}
