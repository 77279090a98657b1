//! Record store subsystem
//!
//! The result of a load: records in file order plus one unique index per
//! indexed field.
//!
//! # API
//!
//! - `load(schema, content, config)` - decode into a new store
//! - `count()` / `record_at(i)` - positional access
//! - `index_at(slot)` - index by declaration slot, `None` if absent
//! - `lookup_primary(key)` - lookup in the first index

mod record_store;

pub use record_store::{load, load_file, IndexRef, RecordStore};
