//! Formatting conventions shared by every writer.
//!
//! A `poet.toml` looks like:
//!
//! ```toml
//! indent = 4
//! generator-name = "Poet"
//! date-format = "%-m/%-d/%y"
//! add-generation-date = true
//! file-extension = "swift"
//! ```
//!
//! Every key is optional.

use std::{fmt::Write, path::Path, str::FromStr};

use chrono::{
    NaiveDate,
    format::{Item, StrftimeItems},
};
use serde::{Deserialize, Serialize};

use crate::{Error, Indent, Result};

/// Formatting conventions injected into a writer at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct FormatConfig {
    /// Indentation unit for one nesting level.
    pub indent: Indent,
    /// Tool name printed in the "Generated by" header line.
    pub generator_name: String,
    /// chrono format string for the generation date stamp.
    pub date_format: String,
    /// Whether file headers carry a generation date by default.
    pub add_generation_date: bool,
    /// Extension appended to file names in headers and on disk.
    pub file_extension: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent: Indent::SWIFT,
            generator_name: "Poet".to_string(),
            date_format: "%-m/%-d/%y".to_string(),
            add_generation_date: true,
            file_extension: "swift".to_string(),
        }
    }
}

impl FromStr for FormatConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "poet.toml")
    }
}

impl FormatConfig {
    /// Parse a configuration file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Render a date with the configured format.
    ///
    /// Falls back to ISO 8601 if the format string is invalid, so rendering
    /// never fails.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        match write!(out, "{}", date.format(&self.date_format)) {
            Ok(()) => out,
            Err(_) => date.to_string(),
        }
    }

    /// File name with the configured extension, e.g. `Model.swift`.
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.file_extension)
    }
}

fn parse_config(content: &str, filename: &str) -> Result<FormatConfig> {
    let config: FormatConfig =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    if StrftimeItems::new(&config.date_format).any(|item| matches!(item, Item::Error)) {
        return Err(Error::date_format(&config.date_format, content, filename));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config: FormatConfig = "".parse().unwrap();
        assert_eq!(config, FormatConfig::default());
    }

    #[test]
    fn test_parse_overrides() {
        let config: FormatConfig = r#"
            indent = "tab"
            generator-name = "ModelGen"
            add-generation-date = false
            "#
        .parse()
        .unwrap();

        assert_eq!(config.indent, Indent::Tab);
        assert_eq!(config.generator_name, "ModelGen");
        assert!(!config.add_generation_date);
        assert_eq!(config.file_extension, "swift");
    }

    #[test]
    fn test_parse_indent_width() {
        let config: FormatConfig = "indent = 2".parse().unwrap();
        assert_eq!(config.indent, Indent::Spaces(2));
    }

    #[test]
    fn test_parse_error() {
        let err = "indent = 42".parse::<FormatConfig>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_syntax_error_has_span() {
        let err = "indent = ".parse::<FormatConfig>().unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!("indnet = 2".parse::<FormatConfig>().is_err());
    }

    #[test]
    fn test_invalid_date_format() {
        let err = r#"date-format = "%Q""#.parse::<FormatConfig>().unwrap_err();
        assert!(matches!(*err, Error::DateFormat { .. }));
    }

    #[test]
    fn test_format_date() {
        let config = FormatConfig::default();
        let date = NaiveDate::from_ymd_opt(2015, 11, 10).unwrap();
        assert_eq!(config.format_date(date), "11/10/15");
    }

    #[test]
    fn test_format_date_invalid_falls_back() {
        let config = FormatConfig {
            date_format: "%Q".to_string(),
            ..FormatConfig::default()
        };
        let date = NaiveDate::from_ymd_opt(2015, 11, 10).unwrap();
        assert_eq!(config.format_date(date), "2015-11-10");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(FormatConfig::default().file_name("Model"), "Model.swift");
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("poet.toml");
        fs::write(&path, "file-extension = \"swiftinterface\"").unwrap();

        let config = FormatConfig::from_file(&path).unwrap();
        assert_eq!(config.file_extension, "swiftinterface");
    }

    #[test]
    fn test_from_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = FormatConfig::from_file(temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
