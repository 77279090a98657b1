//! Structured literal decoding for composite fields
//!
//! The token is parsed as JSON and checked against the declared shape:
//! - struct: object, declared members matching their kinds
//! - list: array, every element matching the element kind if declared
//! - map: object, every value matching the value kind if declared
//!
//! `null` is accepted wherever a value is expected and leaves it unset.

use serde_json::Value as JsonValue;

use crate::schema::{CompositeKind, FloatWidth, IntWidth, TypeKind};

/// Decodes a structured literal into the declared composite shape
pub fn decode_composite(token: &str, kind: &CompositeKind) -> Result<JsonValue, String> {
    let value: JsonValue =
        serde_json::from_str(token).map_err(|e| format!("invalid structured literal: {}", e))?;
    check_composite(&value, kind, "$")?;
    Ok(value)
}

fn check_composite(value: &JsonValue, kind: &CompositeKind, path: &str) -> Result<(), String> {
    if value.is_null() {
        return Ok(());
    }

    match kind {
        CompositeKind::Struct(members) => {
            let entries = value.as_object().ok_or_else(|| type_error(path, "object", value))?;
            for (key, item) in entries {
                if let Some(kind) = member_kind(members, key) {
                    check_kind(item, kind, &format!("{}.{}", path, key))?;
                }
            }
        }
        CompositeKind::List(element) => {
            let items = value.as_array().ok_or_else(|| type_error(path, "array", value))?;
            if let Some(element) = element {
                for (i, item) in items.iter().enumerate() {
                    check_kind(item, element, &format!("{}[{}]", path, i))?;
                }
            }
        }
        CompositeKind::Map(value_kind) => {
            let entries = value.as_object().ok_or_else(|| type_error(path, "object", value))?;
            if let Some(value_kind) = value_kind {
                for (key, item) in entries {
                    check_kind(item, value_kind, &format!("{}.{}", path, key))?;
                }
            }
        }
    }
    Ok(())
}

fn check_kind(value: &JsonValue, kind: &TypeKind, path: &str) -> Result<(), String> {
    if value.is_null() {
        return Ok(());
    }

    let ok = match kind {
        TypeKind::Bool => value.is_boolean(),
        TypeKind::Int(width) => value.as_i64().is_some_and(|v| int_fits(v, *width)),
        TypeKind::Uint(width) => value.as_u64().is_some_and(|v| uint_fits(v, *width)),
        TypeKind::Float(FloatWidth::W64) => value.is_number(),
        TypeKind::Float(FloatWidth::W32) => {
            value.as_f64().is_some_and(|v| v.abs() <= f64::from(f32::MAX))
        }
        TypeKind::String => value.is_string(),
        TypeKind::Composite(inner) => return check_composite(value, inner, path),
    };

    if ok {
        Ok(())
    } else {
        Err(type_error(path, &kind.type_name(), value))
    }
}

/// Exact member name first, then a case-insensitive match
fn member_kind<'a>(members: &'a [(String, TypeKind)], key: &str) -> Option<&'a TypeKind> {
    members
        .iter()
        .find(|(name, _)| name == key)
        .or_else(|| members.iter().find(|(name, _)| name.eq_ignore_ascii_case(key)))
        .map(|(_, kind)| kind)
}

fn int_fits(v: i64, width: IntWidth) -> bool {
    let bits = width.bits();
    if bits == 64 {
        return true;
    }
    let limit = 1i64 << (bits - 1);
    (-limit..limit).contains(&v)
}

fn uint_fits(v: u64, width: IntWidth) -> bool {
    let bits = width.bits();
    bits == 64 || v < (1u64 << bits)
}

fn type_error(path: &str, expected: &str, value: &JsonValue) -> String {
    format!("{}: expected {}, got {}", path, expected, json_type_name(value))
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
