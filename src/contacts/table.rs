//! In-memory CSV table

use super::ContactsError;
use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::io;
use std::path::Path;

/// Header row plus rows of text cells. Every row has exactly one cell per
/// header; an empty cell stands for a missing value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Read a comma-separated file whose first record is the header row
    pub fn read_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open CSV '{}'", path.display()))?;
        Self::from_reader(file).with_context(|| format!("Failed to read CSV '{}'", path.display()))
    }

    /// Parse CSV content. Short records are padded with empty cells.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);

        let mut headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if let Some(first) = headers.first_mut()
            && let Some(stripped) = first.strip_prefix('\u{feff}')
        {
            *first = stripped.to_string();
        }

        let mut table = Table::new(headers);
        for (index, result) in reader.records().enumerate() {
            let record = result?;
            if record.len() > table.headers.len() {
                return Err(ContactsError::RecordTooLong {
                    row: index + 1,
                    expected: table.headers.len(),
                    found: record.len(),
                }
                .into());
            }

            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(table.headers.len(), String::new());
            table.rows.push(row);
        }

        Ok(table)
    }

    /// Write the header row followed by every data row
    pub fn write_path(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create CSV '{}'", path.display()))?;
        self.to_writer(file)
            .with_context(|| format!("Failed to write CSV '{}'", path.display()))
    }

    pub fn to_writer<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut writer = WriterBuilder::new().from_writer(writer);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Index of the first column with this exact header
    pub fn column_index(&self, name: &str) -> Result<usize, ContactsError> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| ContactsError::MissingColumn {
                column: name.to_string(),
                available: self.headers.clone(),
            })
    }

    /// Trim leading and trailing whitespace from every cell
    pub fn trim_cells(&mut self) {
        for cell in self.rows.iter_mut().flatten() {
            let trimmed = cell.trim();
            if trimmed.len() != cell.len() {
                *cell = trimmed.to_string();
            }
        }
    }
}
