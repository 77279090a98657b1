//! Row and field tokenizer
//!
//! Content is split on the row terminator. A chunk loses exactly one
//! trailing `\n`; empty chunks and chunks starting with the comment marker
//! are dropped. Every other chunk is split on the field delimiter.
//!
//! The first retained row is the header. It is never decoded.

use super::config::LoadConfig;

/// Retained rows of a file, header separated from data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedFile {
    /// First retained row, if any
    pub header: Option<Vec<String>>,
    /// Remaining rows, in file order
    pub rows: Vec<Vec<String>>,
}

impl TokenizedFile {
    /// Number of data rows
    pub fn data_rows(&self) -> usize {
        self.rows.len()
    }
}

/// Splits content into all retained rows, header included
pub fn tokenize(content: &str, config: &LoadConfig) -> Vec<Vec<String>> {
    let delimiter = config.field_delimiter();
    let comment = config.comment_marker();

    content
        .split(config.line_terminator())
        .filter_map(|chunk| retained_line(chunk, comment))
        .map(|line| line.split(delimiter).map(str::to_string).collect())
        .collect()
}

/// Tokenizes content and separates the header row
pub fn tokenize_file(content: &str, config: &LoadConfig) -> TokenizedFile {
    split_header(tokenize(content, config))
}

/// Separates the first row as header
pub fn split_header(mut rows: Vec<Vec<String>>) -> TokenizedFile {
    if rows.is_empty() {
        return TokenizedFile::default();
    }
    let header = rows.remove(0);
    TokenizedFile {
        header: Some(header),
        rows,
    }
}

fn retained_line<'a>(chunk: &'a str, comment: &str) -> Option<&'a str> {
    let line = chunk.strip_suffix('\n').unwrap_or(chunk);
    if line.is_empty() || line.starts_with(comment) {
        return None;
    }
    Some(line)
}
