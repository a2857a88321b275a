//! Base trait for the command pattern

use anyhow::Result;
use std::io::Write;

/// Trait that all commands must implement
pub trait Command {
    /// Execute the command, writing user-facing output to `out`
    fn execute(&self, out: &mut dyn Write) -> Result<()>;
}
