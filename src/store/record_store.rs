//! Record store
//!
//! Holds the records and indexes of the last successful load. A load
//! decodes into scratch storage and replaces the published state only on
//! success; a failed load leaves the previous state visible.
//!
//! After a load the store is read-only and may be shared across threads.
//! Loads take `&mut self`, so a reload cannot race with readers.

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::decode::{Record, Value};
use crate::format::LoadConfig;
use crate::index::{Index, IndexKey};
use crate::load::{decode_content, read_source, Decoded, LoadError, LoadResult};
use crate::observability::{log_event_with_fields, Event};
use crate::schema::Schema;

/// Decoded records plus their unique indexes
#[derive(Debug, Clone)]
pub struct RecordStore {
    schema: Arc<Schema>,
    header: Option<Vec<String>>,
    records: Vec<Record>,
    indexes: Vec<Index>,
}

impl RecordStore {
    /// Creates an empty store bound to a schema
    pub fn new(schema: Arc<Schema>) -> Self {
        Self {
            schema,
            header: None,
            records: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Loads in-memory content, replacing the current state on success.
    pub fn load_str(&mut self, content: &str, config: &LoadConfig) -> LoadResult<()> {
        match decode_content(&self.schema, content, config) {
            Ok(decoded) => {
                self.publish(decoded);
                Ok(())
            }
            Err(e) => {
                log_event_with_fields(
                    Event::LoadRejected,
                    &[
                        ("code", e.code().code()),
                        ("kept_records", self.records.len().to_string().as_str()),
                    ],
                );
                Err(e)
            }
        }
    }

    /// Reads and loads a file, replacing the current state on success.
    pub fn load_file(&mut self, path: &Path, config: &LoadConfig) -> LoadResult<()> {
        let content = read_source(path)?;
        self.load_str(&content, config)
    }

    fn publish(&mut self, decoded: Decoded) {
        self.header = decoded.header;
        self.records = decoded.records;
        self.indexes = decoded.indexes;

        log_event_with_fields(
            Event::LoadPublished,
            &[
                ("indexes", self.indexes.len().to_string().as_str()),
                ("records", self.records.len().to_string().as_str()),
            ],
        );
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of loaded records
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a zero-based position
    pub fn record_at(&self, position: usize) -> LoadResult<&Record> {
        self.records
            .get(position)
            .ok_or_else(|| LoadError::out_of_range(position, self.records.len()))
    }

    /// Records in file order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// The discarded header row of the last load, if the file had one
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// Number of indexes (one per indexed field)
    pub fn index_count(&self) -> usize {
        self.indexes.len()
    }

    /// Index by slot; out-of-range slots yield `None`
    pub fn index_at(&self, slot: usize) -> Option<IndexRef<'_>> {
        self.indexes.get(slot).map(|index| IndexRef {
            index,
            records: &self.records,
        })
    }

    /// Looks up a key in the first declared index
    pub fn lookup_primary(&self, key: impl Into<IndexKey>) -> Option<&Record> {
        self.index_at(0)?.get(&key.into())
    }

    /// Value of a named field in the record at `position`
    pub fn value(&self, position: usize, field: &str) -> Option<&Value> {
        let column = self.schema.position_of(field)?;
        self.records.get(position)?.get(column)
    }

    /// Converts a record into a JSON object keyed by field name
    pub fn record_json(&self, record: &Record) -> serde_json::Value {
        let object = self
            .schema
            .fields()
            .iter()
            .zip(record.values())
            .map(|(field, value)| (field.name().to_string(), value.to_json()))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(object)
    }

    /// Deserializes the record at `position` into a caller type
    pub fn record_as<T: DeserializeOwned>(&self, position: usize) -> LoadResult<T> {
        let record = self.record_at(position)?;
        serde_json::from_value(self.record_json(record))
            .map_err(|e| LoadError::conversion(position, e.to_string()))
    }
}

/// Index view resolving positions to records
#[derive(Debug, Clone, Copy)]
pub struct IndexRef<'a> {
    index: &'a Index,
    records: &'a [Record],
}

impl<'a> IndexRef<'a> {
    /// Record holding `key`
    pub fn get(&self, key: &IndexKey) -> Option<&'a Record> {
        self.index.get(key).and_then(|pos| self.records.get(pos))
    }

    /// Position of the record holding `key`
    pub fn position(&self, key: &IndexKey) -> Option<usize> {
        self.index.get(key)
    }

    pub fn contains(&self, key: &IndexKey) -> bool {
        self.index.contains(key)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Indexed field name
    pub fn field(&self) -> &'a str {
        self.index.field()
    }

    /// Underlying key -> position index
    pub fn raw(&self) -> &'a Index {
        self.index
    }
}

/// Decodes content into a fresh store
pub fn load(schema: Arc<Schema>, content: &str, config: &LoadConfig) -> LoadResult<RecordStore> {
    let mut store = RecordStore::new(schema);
    store.load_str(content, config)?;
    Ok(store)
}

/// Reads and decodes a file into a fresh store
pub fn load_file(schema: Arc<Schema>, path: &Path, config: &LoadConfig) -> LoadResult<RecordStore> {
    let mut store = RecordStore::new(schema);
    store.load_file(path, config)?;
    Ok(store)
}
