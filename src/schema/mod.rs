//! Schema descriptor subsystem
//!
//! A schema is derived once from a representative record shape and never
//! changes afterwards.
//!
//! # Rules
//!
//! - The shape must be a struct of named fields
//! - Every field kind belongs to the closed `TypeKind` set
//! - Indexing is an explicit per-field opt-in
//! - Composite fields (struct, list, map) cannot be indexed

mod errors;
mod shape;
mod types;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult};
pub use shape::{build_schema, parse_kind_name, FieldShape, ShapeDef};
pub use types::{CompositeKind, FieldDescriptor, FloatWidth, IntWidth, Schema, SchemaBuilder, TypeKind};
