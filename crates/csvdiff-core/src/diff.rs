//! Merge-diff engine for two keyed datasets
//!
//! Both datasets are sorted by the key column and walked in lock-step, like a
//! sorted-merge join. Rows whose key appears on one side only are reported as
//! added or removed; rows sharing a key are compared cell by cell.

use crate::address::{cell_address, row_address, AddressStyle};
use crate::error::{Error, Result};
use crate::sorter::{duplicate_keys, sort_by_key};
use crate::table::{Dataset, Row};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Kind of difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMark {
    /// Row only in the second dataset
    Added,
    /// Row only in the first dataset
    Removed,
    /// Cell differs between rows sharing a key
    Changed,
}

impl DiffMark {
    pub fn symbol(self) -> char {
        match self {
            DiffMark::Added => '+',
            DiffMark::Removed => '-',
            DiffMark::Changed => '!',
        }
    }
}

impl std::fmt::Display for DiffMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Which input a row position refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    First,
    Second,
}

/// Raw 0-based position of a difference in the sorted datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DiffPosition {
    Row { side: Side, row: usize },
    Cell { row1: usize, row2: usize, column: usize },
}

impl DiffPosition {
    /// Format the position for display
    pub fn address(&self, style: AddressStyle) -> String {
        match *self {
            DiffPosition::Row { row, .. } => row_address(row, style),
            DiffPosition::Cell { row1, row2, column } => cell_address(row1, row2, column, style),
        }
    }
}

/// The data behind a difference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiffValue {
    /// Comma-joined fields of an added or removed row
    Row(String),
    /// Differing field values, first dataset then second
    Cell { first: String, second: String },
}

impl std::fmt::Display for DiffValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffValue::Row(row) => write!(f, "{}", row),
            DiffValue::Cell { first, second } => write!(f, "\"{}\" <> \"{}\"", first, second),
        }
    }
}

/// A single reported difference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRecord {
    pub mark: DiffMark,
    pub position: DiffPosition,
    /// `<key>,<column name>` for changed cells, empty for whole rows
    pub keyname: String,
    pub value: DiffValue,
}

impl DiffRecord {
    fn added(row: usize, fields: &Row) -> Self {
        Self {
            mark: DiffMark::Added,
            position: DiffPosition::Row {
                side: Side::Second,
                row,
            },
            keyname: String::new(),
            value: DiffValue::Row(fields.joined()),
        }
    }

    fn removed(row: usize, fields: &Row) -> Self {
        Self {
            mark: DiffMark::Removed,
            position: DiffPosition::Row {
                side: Side::First,
                row,
            },
            keyname: String::new(),
            value: DiffValue::Row(fields.joined()),
        }
    }

    /// Format the record position for display
    pub fn address(&self, style: AddressStyle) -> String {
        self.position.address(style)
    }
}

/// Counts of each kind of difference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

impl DiffSummary {
    pub fn from_records(records: &[DiffRecord]) -> Self {
        records.iter().fold(Self::default(), |mut summary, record| {
            match record.mark {
                DiffMark::Added => summary.added += 1,
                DiffMark::Removed => summary.removed += 1,
                DiffMark::Changed => summary.changed += 1,
            }
            summary
        })
    }

    pub fn total(&self) -> usize {
        self.added + self.removed + self.changed
    }
}

/// Check that two datasets can be diffed on the 1-based `key_number`.
///
/// Returns the 0-based key column index.
pub fn validate(first: &Dataset, second: &Dataset, key_number: usize) -> Result<usize> {
    let (left, right) = (first.column_count(), second.column_count());
    if left != right {
        return Err(Error::ColumnCountMismatch { left, right });
    }
    if key_number == 0 || key_number > left {
        return Err(Error::InvalidKeyColumn {
            key: key_number,
            columns: left,
        });
    }
    Ok(key_number - 1)
}

/// Validate, sort and diff two datasets on the 1-based `key_number`
pub fn diff_datasets(
    mut first: Dataset,
    mut second: Dataset,
    key_number: usize,
) -> Result<Vec<DiffRecord>> {
    let key_column = validate(&first, &second, key_number)?;
    for dataset in [&mut first, &mut second] {
        sort_by_key(dataset, key_column);
        let duplicates = duplicate_keys(dataset, key_column);
        if duplicates > 0 {
            log::warn!(
                "{}: {} row(s) repeat a key in column {}, pairing them in file order",
                dataset.source_path.display(),
                duplicates,
                key_number
            );
        }
    }
    Ok(merge_diff(&first, &second, key_column))
}

/// Walk two key-sorted datasets and collect their differences.
///
/// Both datasets must already be sorted on `key_column` and have the same
/// column count; see [`validate`] and [`sort_by_key`].
pub fn merge_diff(first: &Dataset, second: &Dataset, key_column: usize) -> Vec<DiffRecord> {
    let mut diffs = Vec::new();
    let (mut i, mut j) = (0, 0);

    loop {
        match (first.rows.get(i), second.rows.get(j)) {
            (None, None) => break,
            (None, Some(row2)) => {
                diffs.push(DiffRecord::added(j, row2));
                j += 1;
            }
            (Some(row1), None) => {
                diffs.push(DiffRecord::removed(i, row1));
                i += 1;
            }
            (Some(row1), Some(row2)) => {
                let key = row1.key(key_column);
                match key.cmp(row2.key(key_column)) {
                    Ordering::Greater => {
                        diffs.push(DiffRecord::added(j, row2));
                        j += 1;
                    }
                    Ordering::Less => {
                        diffs.push(DiffRecord::removed(i, row1));
                        i += 1;
                    }
                    Ordering::Equal => {
                        for (column, (v1, v2)) in row1.cells.iter().zip(&row2.cells).enumerate() {
                            if v1 != v2 {
                                diffs.push(DiffRecord {
                                    mark: DiffMark::Changed,
                                    position: DiffPosition::Cell {
                                        row1: i,
                                        row2: j,
                                        column,
                                    },
                                    keyname: format!("{},{}", key, first.column_name(column)),
                                    value: DiffValue::Cell {
                                        first: v1.clone(),
                                        second: v2.clone(),
                                    },
                                });
                            }
                        }
                        i += 1;
                        j += 1;
                    }
                }
            }
        }
    }

    let summary = DiffSummary::from_records(&diffs);
    log::debug!(
        "merged {} x {} rows: {} added, {} removed, {} changed",
        first.row_count(),
        second.row_count(),
        summary.added,
        summary.removed,
        summary.changed
    );
    diffs
}
