//! Header normalization and the contact explode step

use super::Table;
use crate::constants;
use crate::utils::ensure_parent_dir;
use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

/// Column names and policy for the explode step
#[derive(Debug, Clone, PartialEq)]
pub struct ExplodeOptions {
    pub name_column: String,
    pub email_column: String,
    /// Emit rows with no names and no emails once instead of dropping them
    pub keep_empty: bool,
}

impl Default for ExplodeOptions {
    fn default() -> Self {
        Self {
            name_column: constants::contacts::NAME_COLUMN.to_string(),
            email_column: constants::contacts::EMAIL_COLUMN.to_string(),
            keep_empty: false,
        }
    }
}

/// Row counts gathered while exploding
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExplodeReport {
    pub input_rows: usize,
    pub output_rows: usize,
    /// 1-based data row numbers that had no contacts and were dropped
    pub dropped_rows: Vec<usize>,
}

/// Python-style title casing: the first cased character of every run of
/// cased characters is uppercased and the rest lowercased.
///
/// Rust has no titlecase mapping, so a character whose uppercase form is
/// several characters keeps only the first one uppercase (`ß` becomes `Ss`,
/// `ﬁ` becomes `Fi`). Single-character titlecase forms such as `ǅ` come out
/// as their uppercase form instead.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;

    for c in value.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased && in_word {
            out.extend(c.to_lowercase());
        } else if cased {
            let mut upper = c.to_uppercase();
            out.extend(upper.next());
            out.extend(upper.flat_map(char::to_lowercase));
        } else {
            out.push(c);
        }
        in_word = cased;
    }

    out
}

/// Trim a header and title-case it
pub fn normalize_header(header: &str) -> String {
    title_case(header.trim())
}

/// Split a multi-valued contact cell on `;`, `,` and newlines, dropping
/// empty pieces
pub fn split_contacts(value: &str) -> Vec<String> {
    value
        .split(constants::contacts::DELIMITERS)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pair names and emails by position, padding the shorter list with empty
/// strings
pub fn pair_contacts(mut names: Vec<String>, mut emails: Vec<String>) -> Vec<(String, String)> {
    let len = names.len().max(emails.len());
    names.resize(len, String::new());
    emails.resize(len, String::new());
    names.into_iter().zip(emails).collect()
}

/// Produce one row per contact pair, copying every other column
pub fn explode(table: &Table, options: &ExplodeOptions) -> Result<(Table, ExplodeReport)> {
    let name_index = table.column_index(&options.name_column)?;
    let email_index = table.column_index(&options.email_column)?;

    let mut output = Table::new(table.headers.clone());
    let mut report = ExplodeReport {
        input_rows: table.rows.len(),
        ..Default::default()
    };

    for (index, row) in table.rows.iter().enumerate() {
        let pairs = pair_contacts(
            split_contacts(&row[name_index]),
            split_contacts(&row[email_index]),
        );

        if pairs.is_empty() {
            if options.keep_empty {
                let mut exploded = row.clone();
                exploded[name_index].clear();
                exploded[email_index].clear();
                output.rows.push(exploded);
            } else {
                warn!(row = index + 1, "dropping row with no contact names or emails");
                report.dropped_rows.push(index + 1);
            }
            continue;
        }

        for (name, email) in pairs {
            let mut exploded = row.clone();
            exploded[name_index] = name;
            exploded[email_index] = email;
            output.rows.push(exploded);
        }
    }

    report.output_rows = output.rows.len();
    Ok((output, report))
}

/// Full pipeline: read, normalize headers, explode, trim and write
pub fn process_csv(input: &Path, output: &Path, options: &ExplodeOptions) -> Result<ExplodeReport> {
    let mut table = Table::read_path(input)?;
    for header in &mut table.headers {
        *header = normalize_header(header);
    }

    let (mut exploded, report) = explode(&table, options)?;
    exploded.trim_cells();

    ensure_parent_dir(output)?;
    exploded.write_path(output)?;

    info!(
        input_rows = report.input_rows,
        output_rows = report.output_rows,
        dropped_rows = report.dropped_rows.len(),
        "exploded contacts"
    );
    Ok(report)
}
