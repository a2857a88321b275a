//! Command implementations

pub mod annotate;
pub mod base;
pub mod explode;
pub mod tree;
pub mod validators;

pub use annotate::AnnotateCommand;
pub use base::Command;
pub use explode::ExplodeCommand;
pub use tree::TreeCommand;
