//! Representative record shapes
//!
//! A shape describes the record a file decodes into:
//!
//! ```json
//! {
//!   "kind": "struct",
//!   "fields": [
//!     {"name": "Name", "type": "string"},
//!     {"name": "Age", "type": "int", "index": true},
//!     {"name": "Tags", "type": "list", "element": "string"},
//!     {"name": "Home", "type": "struct", "fields": [
//!       {"name": "Zip", "type": "uint32"}
//!     ]}
//!   ]
//! }
//! ```
//!
//! Building a schema from a shape is the only place kind names are
//! interpreted; loads dispatch on the resulting `TypeKind`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};
use super::types::{CompositeKind, FloatWidth, IntWidth, Schema, TypeKind};
use crate::observability::{log_event_with_fields, Event};

/// A representative record shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeDef {
    /// Aggregate kind; only "struct" describes a record
    #[serde(default = "default_shape_kind")]
    pub kind: String,
    /// Field declarations in column order
    #[serde(default)]
    pub fields: Vec<FieldShape>,
}

fn default_shape_kind() -> String {
    "struct".to_string()
}

/// One field of a representative shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldShape {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    /// Element kind of a list, value kind of a map
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    /// Explicit opt-in for a unique index
    #[serde(default)]
    pub index: bool,
    /// Members of a struct field
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldShape>,
}

impl FieldShape {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            element: None,
            index: false,
            fields: Vec::new(),
        }
    }

    pub fn indexed(mut self) -> Self {
        self.index = true;
        self
    }

    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    /// Declares the members of a struct field
    pub fn with_fields(mut self, fields: Vec<FieldShape>) -> Self {
        self.fields = fields;
        self
    }
}

impl ShapeDef {
    /// A struct shape with the given fields
    pub fn record(fields: Vec<FieldShape>) -> Self {
        Self {
            kind: default_shape_kind(),
            fields,
        }
    }

    /// Parses a shape from JSON text
    pub fn from_json_str(content: &str) -> SchemaResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| SchemaError::malformed("<in-memory>", format!("invalid JSON: {}", e)))
    }

    /// Reads a shape from a JSON file
    pub fn from_json_file(path: &Path) -> SchemaResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SchemaError::malformed(path.display().to_string(), format!("failed to read file: {}", e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            SchemaError::malformed(path.display().to_string(), format!("invalid JSON: {}", e))
        })
    }

    /// Validates the shape and produces an immutable schema
    pub fn build(&self) -> SchemaResult<Schema> {
        if !matches!(self.kind.as_str(), "struct" | "object") {
            return Err(SchemaError::not_record(&self.kind));
        }

        let mut decls = Vec::with_capacity(self.fields.len());
        for (i, field) in self.fields.iter().enumerate() {
            let kind = resolve_field_kind(i, field)?;
            decls.push((field.name.clone(), kind, field.index));
        }

        let schema = Schema::from_declarations(decls)?;
        log_event_with_fields(
            Event::SchemaBuilt,
            &[
                ("fields", schema.len().to_string().as_str()),
                ("indexes", schema.index_count().to_string().as_str()),
            ],
        );
        Ok(schema)
    }
}

/// Builds a schema from a representative shape
pub fn build_schema(shape: &ShapeDef) -> SchemaResult<Schema> {
    shape.build()
}

fn resolve_field_kind(position: usize, field: &FieldShape) -> SchemaResult<TypeKind> {
    resolve_kind(position, &field.name, field)
}

/// `path` names the field, or `Field.Member` inside a struct
fn resolve_kind(position: usize, path: &str, field: &FieldShape) -> SchemaResult<TypeKind> {
    let kind = parse_kind_name(&field.type_name)
        .ok_or_else(|| SchemaError::unsupported_kind(position, path, &field.type_name))?;

    if !field.fields.is_empty() {
        return match kind {
            TypeKind::Composite(CompositeKind::Struct(_)) if field.element.is_none() => {
                resolve_members(position, path, &field.fields).map(TypeKind::struct_of)
            }
            other => Err(SchemaError::invalid_field(
                position,
                path,
                format!("member fields not allowed on {}", other.type_name()),
            )),
        };
    }

    let Some(element) = field.element.as_deref() else {
        return Ok(kind);
    };

    let element_kind = parse_kind_name(element)
        .ok_or_else(|| SchemaError::unsupported_kind(position, path, element))?;

    match kind {
        TypeKind::Composite(CompositeKind::List(_)) => Ok(TypeKind::list_of(element_kind)),
        TypeKind::Composite(CompositeKind::Map(_)) => Ok(TypeKind::map_of(element_kind)),
        other => Err(SchemaError::invalid_field(
            position,
            path,
            format!("element kind not allowed on {}", other.type_name()),
        )),
    }
}

fn resolve_members(
    position: usize,
    path: &str,
    members: &[FieldShape],
) -> SchemaResult<Vec<(String, TypeKind)>> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::with_capacity(members.len());

    for member in members {
        let member_path = format!("{}.{}", path, member.name);
        if member.name.is_empty() || !seen.insert(member.name.as_str()) {
            return Err(SchemaError::invalid_field(
                position,
                member_path,
                "empty or duplicate member name",
            ));
        }
        if member.index {
            return Err(SchemaError::invalid_field(
                position,
                member_path,
                "struct members cannot be indexed",
            ));
        }
        let kind = resolve_kind(position, &member_path, member)?;
        resolved.push((member.name.clone(), kind));
    }

    Ok(resolved)
}

/// Maps a kind name to a `TypeKind`, or `None` if unsupported
pub fn parse_kind_name(name: &str) -> Option<TypeKind> {
    let kind = match name {
        "bool" => TypeKind::Bool,
        "int" | "int64" => TypeKind::Int(IntWidth::W64),
        "int8" => TypeKind::Int(IntWidth::W8),
        "int16" => TypeKind::Int(IntWidth::W16),
        "int32" => TypeKind::Int(IntWidth::W32),
        "uint" | "uint64" => TypeKind::Uint(IntWidth::W64),
        "uint8" | "byte" => TypeKind::Uint(IntWidth::W8),
        "uint16" => TypeKind::Uint(IntWidth::W16),
        "uint32" => TypeKind::Uint(IntWidth::W32),
        "float32" => TypeKind::Float(FloatWidth::W32),
        "float64" | "float" => TypeKind::Float(FloatWidth::W64),
        "string" => TypeKind::String,
        "struct" | "object" => TypeKind::struct_of(Vec::new()),
        "list" | "array" | "slice" => TypeKind::Composite(CompositeKind::List(None)),
        "map" => TypeKind::Composite(CompositeKind::Map(None)),
        _ => return None,
    };
    Some(kind)
}
