//! Command argument validation utilities
//!
//! Checks that go beyond what clap enforces while parsing.

use crate::utils::absolute_path;
use anyhow::{Result, anyhow};
use std::path::Path;

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Two arguments that must differ were given the same value
    Conflict {
        first: String,
        second: String,
        value: String,
    },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::Conflict {
                first,
                second,
                value,
            } => {
                write!(f, "{} and {} cannot both be '{}'", first, second, value)
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

/// Validate the tree depth limit
pub fn validate_max_depth(max_depth: usize) -> Result<()> {
    if max_depth == 0 {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "--max-depth".to_string(),
                value: max_depth.to_string(),
                reason: "depth must be at least 1".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate the contact column names
///
/// Both must be non-empty and they must name different columns
pub fn validate_contact_columns(name_column: &str, email_column: &str) -> Result<()> {
    for (argument, value) in [("--name-column", name_column), ("--email-column", email_column)] {
        if value.trim().is_empty() {
            return Err(validation_error_to_anyhow(
                CommandValidationError::InvalidValue {
                    argument: argument.to_string(),
                    value: value.to_string(),
                    reason: "column name cannot be empty or whitespace only".to_string(),
                },
            ));
        }
    }

    if name_column == email_column {
        return Err(validation_error_to_anyhow(
            CommandValidationError::Conflict {
                first: "--name-column".to_string(),
                second: "--email-column".to_string(),
                value: name_column.to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate that the exploder does not overwrite its own input
///
/// Paths are compared in absolute, normalized form so `in.csv` and
/// `./in.csv` are the same file.
pub fn validate_distinct_paths(input: &Path, output: &Path) -> Result<()> {
    if absolute_path(input)? == absolute_path(output)? {
        return Err(validation_error_to_anyhow(
            CommandValidationError::Conflict {
                first: "--input".to_string(),
                second: "--output".to_string(),
                value: input.display().to_string(),
            },
        ));
    }
    Ok(())
}
