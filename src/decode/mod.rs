//! Field coercion subsystem
//!
//! Converts string tokens into typed values according to the schema.
//!
//! # Rules
//!
//! - bool: conventional true/false spellings only
//! - integers: blank reads as zero, radix prefixes honored, width checked
//! - floats: blank reads as zero, rounded to the declared width
//! - string: verbatim
//! - composite: embedded JSON checked against the declared shape

mod coerce;
mod composite;
mod numeric;
mod value;

pub use coerce::{coerce_field, coerce_row};
pub use composite::decode_composite;
pub use numeric::{parse_bool, parse_float, parse_int, parse_uint, NumError};
pub use value::{Record, Value};
