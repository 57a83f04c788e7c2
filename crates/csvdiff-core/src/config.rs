//! Run configuration, optionally loaded from JSON

use crate::address::AddressStyle;
use crate::error::{Error, Result};
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options for one diff run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Key column number, 1-based
    pub key_column: usize,
    /// Encoding label for both input files
    pub encoding: String,
    /// Treat the first line of each file as a header
    pub has_title: bool,
    pub address_style: AddressStyle,
    pub hide_address: bool,
    pub hide_keyname: bool,
    pub hide_value: bool,
    pub format: OutputFormat,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            key_column: 1,
            encoding: "utf-8".to_string(),
            has_title: false,
            address_style: AddressStyle::Plain,
            hide_address: false,
            hide_keyname: false,
            hide_value: false,
            format: OutputFormat::Text,
        }
    }
}

impl DiffConfig {
    /// Load a configuration from JSON; missing fields take their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::FileRead {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DiffConfig::default();

        assert_eq!(config.key_column, 1);
        assert_eq!(config.encoding, "utf-8");
        assert_eq!(config.address_style, AddressStyle::Plain);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.has_title);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: DiffConfig =
            serde_json::from_str(r#"{"key_column": 3, "address_style": "spreadsheet"}"#).unwrap();

        assert_eq!(config.key_column, 3);
        assert_eq!(config.address_style, AddressStyle::Spreadsheet);
        assert_eq!(config.encoding, "utf-8");
        assert!(!config.hide_value);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("csvdiff.json");
        fs::write(
            &path,
            r#"{"key_column": 2, "encoding": "shift_jis", "has_title": true, "format": "json"}"#,
        )
        .unwrap();

        let config = DiffConfig::load(&path).unwrap();

        assert_eq!(
            config,
            DiffConfig {
                key_column: 2,
                encoding: "shift_jis".to_string(),
                has_title: true,
                format: OutputFormat::Json,
                ..DiffConfig::default()
            }
        );
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("csvdiff.json");
        fs::write(&path, "{ key_column: 2 ").unwrap();

        assert!(matches!(DiffConfig::load(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = DiffConfig::load("/no/such/config.json");

        assert!(matches!(result, Err(Error::FileRead { .. })));
    }
}
