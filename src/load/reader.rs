//! Source file reader
//!
//! The whole file is read into memory before tokenizing. The file handle
//! is scoped to the read and released on every exit path.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::errors::{LoadError, LoadResult};
use crate::format::{tokenize, LoadConfig};
use crate::observability::{log_event_with_fields, Event};

/// Reads a record file as UTF-8 text.
pub fn read_source(path: &Path) -> LoadResult<String> {
    let file = File::open(path)
        .map_err(|e| LoadError::io(format!("failed to open {}", path.display()), e))?;

    let mut content = String::new();
    BufReader::new(file)
        .read_to_string(&mut content)
        .map_err(|e| LoadError::io(format!("failed to read {}", path.display()), e))?;

    log_event_with_fields(
        Event::FileRead,
        &[
            ("bytes", content.len().to_string().as_str()),
            ("path", path.display().to_string().as_str()),
        ],
    );

    Ok(content)
}

/// Reads a record file and returns all retained rows, header included.
pub fn read_rows(path: &Path, config: &LoadConfig) -> LoadResult<Vec<Vec<String>>> {
    let content = read_source(path)?;
    Ok(tokenize(&content, config))
}
