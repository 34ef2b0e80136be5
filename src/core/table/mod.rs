//! Per-collection metadata tables
//!
//! Rows flattened from different objects rarely share a column set, so each
//! collection accumulates the union of every column it has seen alongside
//! the ordered row list, and serializes to a sparse CSV on demand. Header
//! order follows the field set's iteration order and is deliberately not
//! byte-stable between runs; consumers get a guaranteed column *set*, not a
//! column *sequence*.

use crate::domain::errors::FolioError;
use crate::domain::result::Result;
use crate::domain::Dialect;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// One flattened metadata row: column name to cell value
pub type Row = HashMap<String, String>;

/// Accumulates flattened rows and the observed column universe for one
/// collection and one dialect
#[derive(Debug)]
pub struct MetadataTable {
    fields: HashSet<String>,
    rows: Vec<Row>,
}

impl MetadataTable {
    /// Creates an empty table whose field set holds only `pid`
    pub fn new() -> Self {
        let mut fields = HashSet::new();
        fields.insert("pid".to_string());
        Self {
            fields,
            rows: Vec::new(),
        }
    }

    /// Appends a row and unions its columns into the field set
    pub fn add_row(&mut self, row: Row) {
        for column in row.keys() {
            if !self.fields.contains(column) {
                self.fields.insert(column.clone());
            }
        }
        self.rows.push(row);
    }

    /// Number of distinct columns observed, `pid` included
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Number of accumulated rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Writes the table as CSV, or skips it entirely
    ///
    /// A table that never saw a data column (only `pid`) produces no file;
    /// the return value reports whether a file was written. Rows missing a
    /// column leave that cell blank.
    pub fn write_csv(&self, path: &Path) -> Result<bool> {
        if self.fields.len() < 2 {
            tracing::debug!(
                path = %path.display(),
                "No data columns accumulated, skipping CSV"
            );
            return Ok(false);
        }

        let header: Vec<&String> = self.fields.iter().collect();
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(header.iter().map(|field| field.as_str()))?;
        for row in &self.rows {
            writer.write_record(
                header
                    .iter()
                    .map(|field| row.get(field.as_str()).map(String::as_str).unwrap_or("")),
            )?;
        }
        writer.flush().map_err(FolioError::from)?;
        Ok(true)
    }
}

impl Default for MetadataTable {
    fn default() -> Self {
        Self::new()
    }
}

/// The pair of per-dialect tables owned by one collection traversal frame
///
/// Allocated when a collection is entered and dropped when its export
/// completes; nothing survives past the owning recursion frame.
#[derive(Debug, Default)]
pub struct CollectionTables {
    /// Flat Dublin Core rows
    pub dublin_core: MetadataTable,

    /// Nested MODS rows
    pub mods: MetadataTable,
}

impl CollectionTables {
    /// Creates a fresh pair of empty tables
    pub fn new() -> Self {
        Self {
            dublin_core: MetadataTable::new(),
            mods: MetadataTable::new(),
        }
    }

    /// Serializes both tables into `dir`, returning how many files were
    /// actually written
    pub fn flush(&self, dir: &Path) -> Result<u32> {
        let mut written = 0;
        for (dialect, table) in [
            (Dialect::Mods, &self.mods),
            (Dialect::DublinCore, &self.dublin_core),
        ] {
            let path = dir.join(dialect.csv_file_name());
            if table.write_csv(&path)? {
                tracing::info!(
                    dialect = %dialect,
                    path = %path.display(),
                    rows = table.row_count(),
                    "Wrote collection metadata table"
                );
                written += 1;
            }
        }
        Ok(written)
    }
}
