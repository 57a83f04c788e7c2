//! csvdiff-core: Core library for diffing keyed CSV tables
//!
//! This library provides functionality to:
//! - Load CSV files in any encoding into padded, rectangular datasets
//! - Sort datasets by a key column
//! - Diff two sorted datasets with a sorted-merge walk
//! - Format row and cell positions as plain or spreadsheet-style addresses
//! - Render the differences as text or JSON

pub mod address;
pub mod config;
pub mod diff;
pub mod error;
pub mod loader;
pub mod report;
pub mod sorter;
pub mod table;

pub use address::{cell_address, column_letters, row_address, AddressStyle};
pub use config::DiffConfig;
pub use diff::{
    diff_datasets, merge_diff, validate, DiffMark, DiffPosition, DiffRecord, DiffSummary,
    DiffValue, Side,
};
pub use error::{Error, Result};
pub use loader::{load_csv, parse_csv_str, resolve_encoding};
pub use report::{render_record, write_report, OutputFormat, ReportOptions};
pub use sorter::sort_by_key;
pub use table::{Dataset, Row};

use std::path::Path;

/// Load both files and diff them as described by `config`
pub fn diff_files<P: AsRef<Path>, Q: AsRef<Path>>(
    first: P,
    second: Q,
    config: &DiffConfig,
) -> Result<Vec<DiffRecord>> {
    let encoding = resolve_encoding(&config.encoding)?;
    let first = load_csv(first, encoding, config.has_title)?;
    let second = load_csv(second, encoding, config.has_title)?;
    diff_datasets(first, second, config.key_column)
}
