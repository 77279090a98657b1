//! Load configuration
//!
//! Delimiters are passed explicitly to every load. An empty string in any
//! field means "unset" and falls back to the default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::load::{LoadError, LoadResult};

/// Default field delimiter
pub const DEFAULT_FIELD_DELIMITER: &str = "~";
/// Default comment marker
pub const DEFAULT_COMMENT_MARKER: &str = "#";
/// Default row terminator
pub const DEFAULT_LINE_TERMINATOR: &str = "!####!\n";

/// Format settings for one load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Separates fields within a row (default: "~")
    #[serde(default = "default_field_delimiter")]
    pub field_delimiter: String,

    /// Marks a row as a comment (default: "#")
    #[serde(default = "default_comment_marker")]
    pub comment_marker: String,

    /// Separates rows (default: "!####!\n")
    #[serde(default = "default_line_terminator")]
    pub line_terminator: String,
}

fn default_field_delimiter() -> String {
    DEFAULT_FIELD_DELIMITER.to_string()
}

fn default_comment_marker() -> String {
    DEFAULT_COMMENT_MARKER.to_string()
}

fn default_line_terminator() -> String {
    DEFAULT_LINE_TERMINATOR.to_string()
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            field_delimiter: default_field_delimiter(),
            comment_marker: default_comment_marker(),
            line_terminator: default_line_terminator(),
        }
    }
}

fn or_default<'a>(value: &'a str, default: &'static str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

impl LoadConfig {
    /// Reads a config from a JSON file; missing keys take their defaults
    pub fn from_json_file(path: &Path) -> LoadResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LoadError::io(format!("failed to read config {}", path.display()), e)
        })?;

        serde_json::from_str(&content).map_err(|e| {
            LoadError::config(format!("invalid config {}: {}", path.display(), e))
        })
    }

    /// Sets the field delimiter
    pub fn with_field_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.field_delimiter = delimiter.into();
        self
    }

    /// Sets the comment marker
    pub fn with_comment_marker(mut self, marker: impl Into<String>) -> Self {
        self.comment_marker = marker.into();
        self
    }

    /// Sets the row terminator
    pub fn with_line_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.line_terminator = terminator.into();
        self
    }

    /// Effective field delimiter
    pub fn field_delimiter(&self) -> &str {
        or_default(&self.field_delimiter, DEFAULT_FIELD_DELIMITER)
    }

    /// Effective comment marker
    pub fn comment_marker(&self) -> &str {
        or_default(&self.comment_marker, DEFAULT_COMMENT_MARKER)
    }

    /// Effective row terminator
    pub fn line_terminator(&self) -> &str {
        or_default(&self.line_terminator, DEFAULT_LINE_TERMINATOR)
    }

    /// A copy with every unset field replaced by its default
    pub fn resolved(&self) -> Self {
        Self {
            field_delimiter: self.field_delimiter().to_string(),
            comment_marker: self.comment_marker().to_string(),
            line_terminator: self.line_terminator().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoadConfig::default();
        assert_eq!(config.field_delimiter(), "~");
        assert_eq!(config.comment_marker(), "#");
        assert_eq!(config.line_terminator(), "!####!\n");
    }

    #[test]
    fn test_empty_fields_fall_back() {
        let config = LoadConfig::default()
            .with_field_delimiter("")
            .with_comment_marker("")
            .with_line_terminator("");
        assert_eq!(config.resolved(), LoadConfig::default());
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config: LoadConfig = serde_json::from_str(r#"{"field_delimiter": ","}"#).unwrap();
        assert_eq!(config.field_delimiter(), ",");
        assert_eq!(config.line_terminator(), DEFAULT_LINE_TERMINATOR);
    }

    #[test]
    fn test_config_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("format.json");
        fs::write(&path, r#"{"line_terminator": "\n", "comment_marker": "//"}"#).unwrap();

        let config = LoadConfig::from_json_file(&path).unwrap();
        assert_eq!(config.line_terminator(), "\n");
        assert_eq!(config.comment_marker(), "//");
        assert_eq!(config.field_delimiter(), "~");
    }

    #[test]
    fn test_config_from_missing_file() {
        let err = LoadConfig::from_json_file(Path::new("/nonexistent/format.json")).unwrap_err();
        assert_eq!(err.code().code(), "RF_IO_ERROR");
    }
}
