//! CSV loader: decoding, ragged-row padding and title-row extraction

use crate::error::{Error, Result};
use crate::table::Dataset;
use encoding_rs::Encoding;
use std::fs;
use std::path::Path;

/// Resolve an encoding label such as `utf-8`, `shift_jis` or `latin1`
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::UnknownEncoding(label.to_string()))
}

/// Load a CSV file into a Dataset
pub fn load_csv<P: AsRef<Path>>(
    path: P,
    encoding: &'static Encoding,
    has_title: bool,
) -> Result<Dataset> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (content, had_errors) = encoding.decode_with_bom_removal(&bytes);
    if had_errors {
        return Err(Error::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        });
    }

    let dataset = parse_csv_str(&content, path, has_title)?;
    log::debug!(
        "loaded {} ({}): {} rows, {} columns",
        path.display(),
        encoding.name(),
        dataset.row_count(),
        dataset.column_count()
    );
    Ok(dataset)
}

/// Parse CSV from an already decoded string
pub fn parse_csv_str<P: AsRef<Path>>(
    content: &str,
    source_name: P,
    has_title: bool,
) -> Result<Dataset> {
    let path = source_name.as_ref();
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // Ragged rows are padded below
        .from_reader(content.as_bytes());

    // The csv crate skips blank lines; they are kept as empty records so they
    // get padded and diffed like any other row.
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record = csv::StringRecord::new();
    let mut consumed = 0;
    loop {
        records.extend(std::iter::repeat_with(Vec::new).take(blank_lines(content, consumed)));
        let more = csv_reader.read_record(&mut record).map_err(|e| Error::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        if !more {
            break;
        }
        records.push(record.iter().map(str::to_string).collect());
        consumed = csv_reader.position().byte() as usize;
    }

    let width = records.iter().map(Vec::len).max().unwrap_or(0);
    let short = records.iter().filter(|r| r.len() < width).count();
    if short > 0 {
        log::debug!(
            "{}: padded {} short row(s) to {} columns",
            path.display(),
            short,
            width
        );
    }

    Ok(Dataset::from_records(path, records, has_title))
}

/// Number of empty lines starting at byte `offset`, the end of the last record.
fn blank_lines(content: &str, offset: usize) -> usize {
    let bytes = content.as_bytes();
    let mut pos = offset;
    // a record ended by CRLF stops after the CR
    if pos > 0 && bytes.get(pos - 1) == Some(&b'\r') && bytes.get(pos) == Some(&b'\n') {
        pos += 1;
    }

    let mut count = 0;
    loop {
        match bytes.get(pos) {
            Some(b'\r') if bytes.get(pos + 1) == Some(&b'\n') => pos += 2,
            Some(b'\r') | Some(b'\n') => pos += 1,
            _ => return count,
        }
        count += 1;
    }
}
