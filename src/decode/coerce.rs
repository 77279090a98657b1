//! Row validation and per-field coercion
//!
//! A row is either fully coerced into a `Record` or rejected with the first
//! failing field; no partial record escapes this module.

use super::composite::decode_composite;
use super::numeric::{parse_bool, parse_float, parse_int, parse_uint};
use super::value::{Record, Value};
use crate::load::{LoadError, LoadResult};
use crate::schema::{Schema, TypeKind};

/// Coerces one token into a value of the given kind.
///
/// Blank or whitespace-only tokens read as `0` for numeric kinds. Strings
/// are taken verbatim. Returns the rejection reason on failure.
pub fn coerce_field(token: &str, kind: &TypeKind) -> Result<Value, String> {
    let token = if kind.is_numeric() && token.trim().is_empty() {
        "0"
    } else {
        token
    };

    match kind {
        TypeKind::Bool => parse_bool(token)
            .map(Value::Bool)
            .map_err(|e| format!("parse bool {:?}: {}", token, e)),
        TypeKind::Int(width) => parse_int(token, *width)
            .map(Value::Int)
            .map_err(|e| format!("parse {} {:?}: {}", kind.type_name(), token, e)),
        TypeKind::Uint(width) => parse_uint(token, *width)
            .map(Value::Uint)
            .map_err(|e| format!("parse {} {:?}: {}", kind.type_name(), token, e)),
        TypeKind::Float(width) => parse_float(token, *width)
            .map(Value::Float)
            .map_err(|e| format!("parse {} {:?}: {}", kind.type_name(), token, e)),
        TypeKind::String => Ok(Value::String(token.to_string())),
        TypeKind::Composite(shape) => decode_composite(token, shape).map(Value::Composite),
    }
}

/// Validates the token count of a data row and coerces every field.
///
/// `row` is the 1-based data row number used in error reports.
pub fn coerce_row(schema: &Schema, row: usize, tokens: &[String]) -> LoadResult<Record> {
    if tokens.len() != schema.len() {
        return Err(LoadError::field_count_mismatch(row, tokens.len(), schema.len()));
    }

    let mut values = Vec::with_capacity(schema.len());
    for (field, token) in schema.fields().iter().zip(tokens) {
        let value = coerce_field(token, field.kind()).map_err(|reason| {
            LoadError::coercion(row, field.column(), field.name(), token.as_str(), reason)
        })?;
        values.push(value);
    }

    Ok(Record::new(values))
}
