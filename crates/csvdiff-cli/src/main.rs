//! csvdiff CLI
//!
//! Command-line tool printing the differences between two CSV files keyed by a column.

use clap::{Parser, ValueEnum};
use csvdiff_core::{diff_files, write_report, AddressStyle, DiffConfig, OutputFormat, ReportOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csvdiff")]
#[command(about = "Output the difference between two CSV files", long_about = None)]
#[command(version)]
struct Cli {
    /// 1st CSV file
    csv1: PathBuf,

    /// 2nd CSV file
    csv2: PathBuf,

    /// Encoding for CSV files (default: utf-8)
    #[arg(short, long)]
    encoding: Option<String>,

    /// Column number as primary key (range: 1-N, default: 1)
    #[arg(short, long)]
    primarykey: Option<usize>,

    /// Treat the first line as a header
    #[arg(short = 't', long)]
    has_title: bool,

    /// Print addresses in spreadsheet style (A1, 3:3)
    #[arg(short, long)]
    spreadsheet_address: bool,

    /// Do not print row/column addresses
    #[arg(long, visible_alias = "hide-index")]
    hide_address: bool,

    /// Do not print row/column key names
    #[arg(long)]
    hide_keyname: bool,

    /// Do not print difference values
    #[arg(long)]
    hide_value: bool,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// JSON file with default options; flags given here take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Merge the command-line flags over the optional config file
    fn to_config(&self) -> csvdiff_core::Result<DiffConfig> {
        let mut config = match &self.config {
            Some(path) => DiffConfig::load(path)?,
            None => DiffConfig::default(),
        };

        if let Some(key) = self.primarykey {
            config.key_column = key;
        }
        if let Some(encoding) = &self.encoding {
            config.encoding = encoding.clone();
        }
        if let Some(format) = self.format {
            config.format = format.into();
        }
        if self.spreadsheet_address {
            config.address_style = AddressStyle::Spreadsheet;
        }
        config.has_title |= self.has_title;
        config.hide_address |= self.hide_address;
        config.hide_keyname |= self.hide_keyname;
        config.hide_value |= self.hide_value;

        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> csvdiff_core::Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    diff_to(cli, &mut writer)?;
    writer.flush()?;

    Ok(())
}

/// Diff the two files and write the report; nothing is written when the diff fails
fn diff_to<W: Write>(cli: &Cli, writer: &mut W) -> csvdiff_core::Result<()> {
    let config = cli.to_config()?;
    log::debug!("running with {:?}", config);

    let diffs = diff_files(&cli.csv1, &cli.csv2, &config)?;
    write_report(writer, &diffs, &ReportOptions::from(&config))
}
