//! Contact CSV exploding
//!
//! Reads an investor table, splits the multi-valued contact columns and
//! writes one row per (name, email) pair.

pub mod explode;
pub mod table;

pub use explode::{
    ExplodeOptions, ExplodeReport, explode, normalize_header, pair_contacts, process_csv,
    split_contacts, title_case,
};
pub use table::Table;

/// Errors raised while reshaping a contact table
#[derive(Debug, Clone, PartialEq)]
pub enum ContactsError {
    /// A required column is not present after header normalization
    MissingColumn { column: String, available: Vec<String> },
    /// A data row has more cells than the header row
    RecordTooLong {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for ContactsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactsError::MissingColumn { column, available } => {
                write!(
                    f,
                    "Column '{}' not found (available: {})",
                    column,
                    available.join(", ")
                )
            }
            ContactsError::RecordTooLong {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {} has {} fields but the header has {}",
                    row, found, expected
                )
            }
        }
    }
}

impl std::error::Error for ContactsError {}
