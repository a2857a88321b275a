//! Dirtools - directory tree printers and a contact CSV exploder

pub mod commands;
pub mod config;
pub mod constants;
pub mod contacts;
pub mod tree;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::Command;
pub use config::Annotations;
pub use tree::{Entry, FsLister, Lister, TreeNode};
