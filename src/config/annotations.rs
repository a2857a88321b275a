//! Annotation table loading and lookup

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Built-in labels used when no annotation file is given
const BUILTIN: &[(&str, &str)] = &[
    ("api/coaching", "⭐⭐⭐ CORE: Clone exactly"),
    ("components/coaching", "⭐⭐ CLONE & ADAPT"),
    ("lib/ai", "⭐⭐⭐ CRITICAL"),
    ("components/ui", "✅ CLONE ALL"),
];

/// Problems found in an annotation table
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationError {
    /// A key normalized to the empty path
    EmptyPath(String),
    /// A label is empty or whitespace-only
    EmptyLabel(String),
}

impl std::fmt::Display for AnnotationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnotationError::EmptyPath(raw) => {
                write!(f, "Annotation key '{}' does not name a path", raw)
            }
            AnnotationError::EmptyLabel(path) => {
                write!(f, "Annotation for '{}' has an empty label", path)
            }
        }
    }
}

impl std::error::Error for AnnotationError {}

/// Immutable mapping from a `/`-separated path, relative to the walk root,
/// to the label printed after it.
///
/// Annotation files are YAML:
///
/// ```yaml
/// annotations:
///   lib/ai: "⭐⭐⭐ CRITICAL"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    annotations: BTreeMap<String, String>,
}

impl Annotations {
    /// The built-in table
    pub fn builtin() -> Self {
        Self {
            annotations: BUILTIN
                .iter()
                .map(|(path, label)| (path.to_string(), label.to_string()))
                .collect(),
        }
    }

    /// Build a table from raw keys, normalizing them like a loaded file
    pub fn from_map(raw: BTreeMap<String, String>) -> Result<Self, AnnotationError> {
        let mut annotations = BTreeMap::new();
        for (key, label) in raw {
            let path = normalize_key(&key);
            if path.is_empty() {
                return Err(AnnotationError::EmptyPath(key));
            }
            if label.trim().is_empty() {
                return Err(AnnotationError::EmptyLabel(path));
            }
            annotations.insert(path, label);
        }
        Ok(Self { annotations })
    }

    /// Load a table from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read annotations '{}'", path.display()))?;

        let raw: Annotations = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse annotations '{}'", path.display()))?;

        Ok(Self::from_map(raw.annotations)?)
    }

    /// Label for a relative path, if any
    pub fn get(&self, relative_path: &str) -> Option<&str> {
        self.annotations.get(relative_path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

/// Strip `./` prefixes, surrounding slashes and backslash separators
fn normalize_key(key: &str) -> String {
    let mut path = key.trim().replace('\\', "/");
    while let Some(rest) = path.strip_prefix("./") {
        path = rest.to_string();
    }
    path.trim_matches('/').to_string()
}
