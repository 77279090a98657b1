//! Decode pipeline
//!
//! tokenize -> drop header -> per row: coerce, then index
//!
//! Everything is built in scratch storage. The first error aborts the run
//! and the scratch state is dropped; callers publish only a complete
//! `Decoded` value.

use super::errors::LoadResult;
use crate::decode::{coerce_row, Record};
use crate::format::{tokenize_file, LoadConfig};
use crate::index::{Index, IndexBuilder};
use crate::observability::{log_event_with_fields, Event, Logger, ObservationScope, Timer};
use crate::schema::Schema;

/// Fully decoded file contents, ready to publish
#[derive(Debug)]
pub struct Decoded {
    pub header: Option<Vec<String>>,
    pub records: Vec<Record>,
    pub indexes: Vec<Index>,
}

/// Runs the decode pipeline over in-memory content.
pub fn decode_content(schema: &Schema, content: &str, config: &LoadConfig) -> LoadResult<Decoded> {
    let timer = Timer::new();
    let fields = schema.len().to_string();
    let scope = ObservationScope::with_fields("LOAD", &[("fields", fields.as_str())]);

    match run(schema, content, config) {
        Ok(decoded) => {
            scope.complete_with_fields(&[
                ("elapsed_ms", timer.elapsed_ms().as_str()),
                ("indexes", decoded.indexes.len().to_string().as_str()),
                ("records", decoded.records.len().to_string().as_str()),
            ]);
            Ok(decoded)
        }
        Err(e) => {
            scope.fail(e.code().code(), e.message());
            Err(e)
        }
    }
}

fn run(schema: &Schema, content: &str, config: &LoadConfig) -> LoadResult<Decoded> {
    let file = tokenize_file(content, config);
    log_event_with_fields(
        Event::Tokenized,
        &[("rows", file.data_rows().to_string().as_str())],
    );

    if let Some(header) = &file.header {
        log_event_with_fields(
            Event::HeaderDiscarded,
            &[("tokens", header.len().to_string().as_str())],
        );
    }

    let mut records = Vec::with_capacity(file.rows.len());
    let mut indexes = IndexBuilder::for_schema(schema);

    for (i, tokens) in file.rows.iter().enumerate() {
        let row = i + 1;
        let record = coerce_row(schema, row, tokens)?;
        indexes.insert_record(&record, records.len(), row)?;
        records.push(record);

        Logger::trace("ROW_DECODED", &[("row", row.to_string().as_str())]);
    }

    Ok(Decoded {
        header: file.header,
        records,
        indexes: indexes.finish(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::LoadErrorCode;
    use crate::schema::TypeKind;

    fn schema() -> Schema {
        Schema::builder()
            .field("Name", TypeKind::String)
            .indexed("Age", TypeKind::int())
            .build()
            .unwrap()
    }

    fn lines() -> LoadConfig {
        LoadConfig::default().with_line_terminator("\n")
    }

    #[test]
    fn test_decode_content() {
        let decoded = decode_content(&schema(), "#c\nName~Age\nalice~30\nbob~25\n", &lines()).unwrap();
        assert_eq!(decoded.header, Some(vec!["Name".to_string(), "Age".to_string()]));
        assert_eq!(decoded.records.len(), 2);
        assert_eq!(decoded.indexes.len(), 1);
        assert_eq!(decoded.indexes[0].len(), 2);
    }

    #[test]
    fn test_header_is_not_validated() {
        let decoded = decode_content(&schema(), "just one title\nalice~30\n", &lines()).unwrap();
        assert_eq!(decoded.records.len(), 1);
    }

    #[test]
    fn test_no_rows_is_empty() {
        let decoded = decode_content(&schema(), "# only comments\n", &lines()).unwrap();
        assert!(decoded.header.is_none());
        assert!(decoded.records.is_empty());
        assert!(decoded.indexes[0].is_empty());
    }

    #[test]
    fn test_fail_fast_reports_first_error() {
        let err = decode_content(&schema(), "h\nalice~30\ndave\ncarol~30\n", &lines()).unwrap_err();
        assert_eq!(err.code(), LoadErrorCode::Format);
        assert_eq!(err.row(), Some(2));
    }
}
