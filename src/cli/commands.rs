//! CLI command implementations
//!
//! Each command builds its `LoadConfig` from the optional `--config` file,
//! applies flag overrides on top, and prints one JSON response.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::decode::coerce_field;
use crate::format::LoadConfig;
use crate::index::IndexKey;
use crate::load::read_rows;
use crate::observability::{Logger, Severity};
use crate::schema::ShapeDef;
use crate::store::{load_file, RecordStore};

use super::args::{Command, FormatArgs, SourceArgs};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    if cli.verbose {
        Logger::set_min_severity(Severity::Info);
    }
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    let data = match cmd {
        Command::Check { source } => check(&source)?,
        Command::Get { source, row } => get(&source, row)?,
        Command::Lookup { source, key, slot } => lookup(&source, &key, slot)?,
        Command::Rows { data, format } => rows(&data, &format)?,
    };
    write_response(data)
}

/// Loads the file and reports counts
pub fn check(source: &SourceArgs) -> CliResult<Value> {
    let store = open_store(source)?;

    let indexes = (0..store.index_count())
        .filter_map(|slot| store.index_at(slot))
        .map(|index| json!({"field": index.field(), "keys": index.len()}))
        .collect::<Vec<_>>();

    Ok(json!({
        "records": store.count(),
        "header": store.header(),
        "indexes": indexes,
    }))
}

/// Prints the record at a zero-based position
pub fn get(source: &SourceArgs, row: usize) -> CliResult<Value> {
    let store = open_store(source)?;
    let record = store.record_at(row)?;
    Ok(store.record_json(record))
}

/// Looks up a record through the index at `slot`
pub fn lookup(source: &SourceArgs, key: &str, slot: usize) -> CliResult<Value> {
    let store = open_store(source)?;
    let index = store.index_at(slot).ok_or(CliError::NoIndex(slot))?;

    let field = store
        .schema()
        .field(index.raw().column())
        .ok_or(CliError::NoIndex(slot))?;

    let value = coerce_field(key, field.kind()).map_err(|reason| CliError::InvalidKey {
        key: key.to_string(),
        field: field.name().to_string(),
        reason,
    })?;
    let index_key = IndexKey::from_value(&value).ok_or_else(|| CliError::InvalidKey {
        key: key.to_string(),
        field: field.name().to_string(),
        reason: format!("{} values are not indexable", field.kind()),
    })?;

    let position = index
        .position(&index_key)
        .ok_or_else(|| CliError::KeyNotFound(key.to_string()))?;
    let record = store.record_at(position)?;

    Ok(json!({
        "position": position,
        "record": store.record_json(record),
    }))
}

/// Prints retained rows as token arrays
pub fn rows(data: &std::path::Path, format: &FormatArgs) -> CliResult<Value> {
    let config = load_config(format)?;
    let rows = read_rows(data, &config)?;
    Ok(json!(rows))
}

fn open_store(source: &SourceArgs) -> CliResult<RecordStore> {
    let schema = ShapeDef::from_json_file(&source.schema)?.build()?;
    let config = load_config(&source.format)?;
    Ok(load_file(Arc::new(schema), &source.data, &config)?)
}

/// Config file first, then flag overrides
fn load_config(format: &FormatArgs) -> CliResult<LoadConfig> {
    let mut config = match &format.config {
        Some(path) => LoadConfig::from_json_file(path)?,
        None => LoadConfig::default(),
    };

    if let Some(delimiter) = &format.delimiter {
        config = config.with_field_delimiter(unescape(delimiter));
    }
    if let Some(comment) = &format.comment {
        config = config.with_comment_marker(unescape(comment));
    }
    if let Some(line_end) = &format.line_end {
        config = config.with_line_terminator(unescape(line_end));
    }

    Ok(config)
}

/// Expands `\n`, `\r`, `\t` and `\\`; other backslashes are kept as-is
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
