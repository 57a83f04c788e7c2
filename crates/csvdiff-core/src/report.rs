//! Text and JSON rendering of diff records

use crate::address::AddressStyle;
use crate::config::DiffConfig;
use crate::diff::{DiffRecord, DiffSummary, DiffValue};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Output format of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What a report shows for each record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: OutputFormat,
    pub style: AddressStyle,
    pub show_address: bool,
    pub show_keyname: bool,
    pub show_value: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            style: AddressStyle::Plain,
            show_address: true,
            show_keyname: true,
            show_value: true,
        }
    }
}

impl From<&DiffConfig> for ReportOptions {
    fn from(config: &DiffConfig) -> Self {
        Self {
            format: config.format,
            style: config.address_style,
            show_address: !config.hide_address,
            show_keyname: !config.hide_keyname,
            show_value: !config.hide_value,
        }
    }
}

/// Render one record as a report line (without newline).
///
/// `<mark> <address> <<keyname>> : <value>`, hidden or empty parts left out.
pub fn render_record(record: &DiffRecord, options: &ReportOptions) -> String {
    let mut line = format!("{} ", record.mark);
    if options.show_address {
        line.push_str(&record.address(options.style));
        line.push(' ');
    }
    if options.show_keyname && !record.keyname.is_empty() {
        line.push_str(&format!("<{}> ", record.keyname));
    }
    if options.show_value {
        let value = record.value.to_string();
        if !value.is_empty() {
            line.push_str(": ");
            line.push_str(&value);
        }
    }
    line
}

/// Write the report in the format selected by `options`
pub fn write_report<W: Write>(
    writer: &mut W,
    records: &[DiffRecord],
    options: &ReportOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Text => write_text(writer, records, options)?,
        OutputFormat::Json => write_json(writer, records, options)?,
    }
    Ok(())
}

/// One line per record followed by the diff count
pub fn write_text<W: Write>(
    writer: &mut W,
    records: &[DiffRecord],
    options: &ReportOptions,
) -> std::io::Result<()> {
    for record in records {
        writeln!(writer, "{}", render_record(record, options))?;
    }
    writeln!(writer, "(diff count: {})", records.len())
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    mark: char,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyname: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a DiffValue>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    diffs: Vec<JsonRecord<'a>>,
    summary: DiffSummary,
    count: usize,
}

/// Pretty JSON document with the records and a summary
pub fn write_json<W: Write>(
    writer: &mut W,
    records: &[DiffRecord],
    options: &ReportOptions,
) -> Result<()> {
    let report = JsonReport {
        diffs: records
            .iter()
            .map(|record| JsonRecord {
                mark: record.mark.symbol(),
                address: options
                    .show_address
                    .then(|| record.address(options.style)),
                keyname: (options.show_keyname && !record.keyname.is_empty())
                    .then_some(record.keyname.as_str()),
                value: options.show_value.then_some(&record.value),
            })
            .collect(),
        summary: DiffSummary::from_records(records),
        count: records.len(),
    };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    Ok(())
}
