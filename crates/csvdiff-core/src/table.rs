//! Core table types for representing loaded CSV data

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A dataset loaded from a single CSV source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Column names, all empty when the source has no title row
    pub header: Vec<String>,
    /// Row data, every row as wide as `header`
    pub rows: Vec<Row>,
    /// Source file path
    pub source_path: PathBuf,
}

impl Dataset {
    /// Build a dataset from raw records, padding every row to the widest one.
    ///
    /// When `has_title` is set the first record becomes the header, otherwise
    /// the header is made of empty names.
    pub fn from_records(
        source_path: impl Into<PathBuf>,
        mut records: Vec<Vec<String>>,
        has_title: bool,
    ) -> Self {
        let width = records.iter().map(Vec::len).max().unwrap_or(0);
        for record in &mut records {
            record.resize(width, String::new());
        }

        let header = if has_title && !records.is_empty() {
            records.remove(0)
        } else {
            vec![String::new(); width]
        };

        Self {
            header,
            rows: records.into_iter().map(Row::new).collect(),
            source_path: source_path.into(),
        }
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Name of the column at `index`, empty when out of range or unnamed
    pub fn column_name(&self, index: usize) -> &str {
        self.header.get(index).map(String::as_str).unwrap_or_default()
    }
}

/// A row of raw field strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<String>,
}

impl Row {
    /// Create a new row
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Field used as the join key, empty when the column is missing
    pub fn key(&self, key_column: usize) -> &str {
        self.cells
            .get(key_column)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Render the row as its comma-joined fields
    pub fn joined(&self) -> String {
        self.cells.join(",")
    }
}
