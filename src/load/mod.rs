//! Load subsystem
//!
//! Reads a record file, decodes every data row and builds the indexes.
//!
//! # Invariants
//!
//! - Fail fast: the first error ends the load
//! - All or nothing: partial results are never published
//! - Errors carry the data row and column where they occurred

mod errors;
mod pipeline;
mod reader;

pub use errors::{LoadError, LoadErrorCode, LoadResult};
pub use pipeline::{decode_content, Decoded};
pub use reader::{read_rows, read_source};
