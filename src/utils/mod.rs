//! Utility modules for common functionality

pub mod filesystem;

// Re-export commonly used functions
pub use filesystem::{absolute_path, ensure_parent_dir};
