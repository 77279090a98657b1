//! recordfile - schema-checked loader for delimited record files
//!
//! A record file is plain text split into rows by a line terminator and
//! into fields by a delimiter. Rows starting with a comment marker are
//! skipped and the first retained row is a header. Every data row is
//! decoded against a schema derived from a representative record shape,
//! and each indexed field gets a unique key -> record index.
//!
//! A load is all-or-nothing: any format, coercion or uniqueness failure
//! leaves the store as it was.

pub mod cli;
pub mod decode;
pub mod format;
pub mod index;
pub mod load;
pub mod observability;
pub mod schema;
pub mod store;

pub use decode::{Record, Value};
pub use format::LoadConfig;
pub use index::IndexKey;
pub use load::{LoadError, LoadErrorCode, LoadResult};
pub use schema::{build_schema, Schema, SchemaError, ShapeDef, TypeKind};
pub use store::{load, load_file, IndexRef, RecordStore};
