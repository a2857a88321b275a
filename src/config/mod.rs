//! Configuration management module

pub mod annotations;

pub use annotations::{AnnotationError, Annotations};
