//! Unique indexes over decoded records
//!
//! An index maps a key to the position of the owning record in the
//! store's record sequence. Positions are handles, not ownership.

use std::collections::HashMap;

use super::key::IndexKey;
use crate::decode::Record;
use crate::load::{LoadError, LoadResult};
use crate::schema::Schema;

/// Record position within a store
pub type RecordPosition = usize;

/// Unique key -> record position mapping for one field
#[derive(Debug, Clone)]
pub struct Index {
    slot: usize,
    field: String,
    column: usize,
    entries: HashMap<IndexKey, RecordPosition>,
}

impl Index {
    pub(crate) fn new(slot: usize, field: impl Into<String>, column: usize) -> Self {
        Self {
            slot,
            field: field.into(),
            column,
            entries: HashMap::new(),
        }
    }

    /// Inserts a key, rejecting duplicates.
    ///
    /// `row` is the data row number reported on collision.
    pub(crate) fn insert(&mut self, key: IndexKey, position: RecordPosition, row: usize) -> LoadResult<()> {
        if self.entries.contains_key(&key) {
            return Err(LoadError::duplicate_index(row, self.column, &self.field, key.to_string()));
        }
        self.entries.insert(key, position);
        Ok(())
    }

    /// Position of the record holding `key`
    pub fn get(&self, key: &IndexKey) -> Option<RecordPosition> {
        self.entries.get(key).copied()
    }

    pub fn contains(&self, key: &IndexKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &IndexKey> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slot number (declaration order among indexed fields)
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Indexed field name
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Indexed column position
    pub fn column(&self) -> usize {
        self.column
    }
}

/// Builds every index of a schema during one load
#[derive(Debug)]
pub struct IndexBuilder {
    indexes: Vec<Index>,
}

impl IndexBuilder {
    /// One empty index per indexed field, in slot order
    pub fn for_schema(schema: &Schema) -> Self {
        let indexes = schema
            .indexed_positions()
            .iter()
            .enumerate()
            .filter_map(|(slot, &column)| {
                schema.field(column).map(|f| Index::new(slot, f.name(), column))
            })
            .collect();
        Self { indexes }
    }

    /// Inserts the indexed values of a just-decoded record
    pub fn insert_record(&mut self, record: &Record, position: RecordPosition, row: usize) -> LoadResult<()> {
        for index in &mut self.indexes {
            // Composite fields are never indexed, so every indexed value has a key
            let Some(key) = record.get(index.column).and_then(IndexKey::from_value) else {
                continue;
            };
            index.insert(key, position, row)?;
        }
        Ok(())
    }

    pub fn finish(self) -> Vec<Index> {
        self.indexes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::Value;
    use crate::load::LoadErrorCode;
    use crate::schema::TypeKind;

    fn schema() -> Schema {
        Schema::builder()
            .indexed("Id", TypeKind::uint())
            .field("Name", TypeKind::String)
            .indexed("Code", TypeKind::String)
            .build()
            .unwrap()
    }

    fn record(id: u64, name: &str, code: &str) -> Record {
        Record::new(vec![
            Value::Uint(id),
            Value::String(name.to_string()),
            Value::String(code.to_string()),
        ])
    }

    #[test]
    fn test_builds_one_index_per_indexed_field() {
        let mut builder = IndexBuilder::for_schema(&schema());
        builder.insert_record(&record(1, "a", "x"), 0, 1).unwrap();
        builder.insert_record(&record(2, "b", "y"), 1, 2).unwrap();

        let indexes = builder.finish();
        assert_eq!(indexes.len(), 2);
        assert_eq!(indexes[0].field(), "Id");
        assert_eq!(indexes[1].slot(), 1);
        assert_eq!(indexes[1].column(), 2);
        assert_eq!(indexes[0].get(&IndexKey::from(2u64)), Some(1));
        assert_eq!(indexes[1].get(&IndexKey::from("x")), Some(0));
        assert_eq!(indexes[1].get(&IndexKey::from("z")), None);
    }

    #[test]
    fn test_duplicate_in_second_index() {
        let mut builder = IndexBuilder::for_schema(&schema());
        builder.insert_record(&record(1, "a", "x"), 0, 1).unwrap();

        let err = builder.insert_record(&record(2, "b", "x"), 1, 2).unwrap_err();
        assert_eq!(err.code(), LoadErrorCode::DuplicateIndex);
        assert_eq!(err.row(), Some(2));
        assert_eq!(err.column(), Some(2));
        assert_eq!(err.field(), Some("Code"));
    }

    #[test]
    fn test_no_indexes() {
        let schema = Schema::builder().field("A", TypeKind::Bool).build().unwrap();
        let mut builder = IndexBuilder::for_schema(&schema);
        builder
            .insert_record(&Record::new(vec![Value::Bool(true)]), 0, 1)
            .unwrap();
        assert!(builder.finish().is_empty());
    }
}
