//! Explode command implementation

use super::Command;
use super::validators;
use crate::contacts::{ExplodeOptions, process_csv};
use anyhow::Result;
use colored::*;
use std::io::Write;
use std::path::PathBuf;

/// Explodes the contact columns of an investor CSV into one row per contact
pub struct ExplodeCommand {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: ExplodeOptions,
}

impl Command for ExplodeCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        validators::validate_contact_columns(
            &self.options.name_column,
            &self.options.email_column,
        )?;
        validators::validate_distinct_paths(&self.input, &self.output)?;

        let report = process_csv(&self.input, &self.output, &self.options)?;

        if !report.dropped_rows.is_empty() {
            writeln!(
                out,
                "{}",
                format!(
                    "Dropped {} rows with no contacts (use --keep-empty to keep them)",
                    report.dropped_rows.len()
                )
                .yellow()
            )?;
        }
        writeln!(
            out,
            "{}",
            format!("Processed → {}", self.output.display()).green()
        )?;

        Ok(())
    }
}
