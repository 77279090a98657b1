//! Index subsystem
//!
//! Indexes are built during a load, one per indexed field, in declaration
//! order.
//!
//! # Invariants
//!
//! - Keys within one index are unique; a collision aborts the load
//! - Entries refer to records by position; the store owns the records
//! - Lookup is a hash probe; iteration order is unspecified

mod key;
mod table;

pub use key::IndexKey;
pub use table::{Index, IndexBuilder, RecordPosition};
