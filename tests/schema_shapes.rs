//! Schema Shape Tests
//!
//! Tests for building schemas from representative shapes:
//! - Only struct shapes describe records
//! - Field order and index flags are preserved
//! - Composite fields cannot be indexed

use recordfile::schema::{FieldShape, SchemaErrorCode};
use recordfile::{build_schema, load, LoadConfig, ShapeDef, TypeKind};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

// =============================================================================
// Shape Parsing Tests
// =============================================================================

/// Shape JSON keeps declaration order and index flags.
#[test]
fn test_shape_from_json() {
    let shape = ShapeDef::from_json_str(
        r#"{
            "kind": "struct",
            "fields": [
                {"name": "Code", "type": "string", "index": true},
                {"name": "Weight", "type": "float32"},
                {"name": "Parts", "type": "list", "element": "uint16"}
            ]
        }"#,
    )
    .unwrap();
    let schema = build_schema(&shape).unwrap();

    let names: Vec<&str> = schema.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["Code", "Weight", "Parts"]);
    assert_eq!(schema.indexed_positions(), &[0]);
    assert_eq!(schema.field(2).unwrap().kind().to_string(), "list<uint16>");
}

/// Kind defaults to struct when omitted.
#[test]
fn test_kind_defaults_to_struct() {
    let shape = ShapeDef::from_json_str(r#"{"fields": [{"name": "A", "type": "int"}]}"#).unwrap();
    assert!(shape.build().is_ok());
}

/// Shape from disk.
#[test]
fn test_shape_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("shape.json");
    fs::write(&path, r#"{"fields": [{"name": "On", "type": "bool"}]}"#).unwrap();

    let schema = ShapeDef::from_json_file(&path).unwrap().build().unwrap();
    assert_eq!(schema.field(0).unwrap().kind(), &TypeKind::Bool);
}

// =============================================================================
// Rejection Tests
// =============================================================================

/// Non-struct shapes are rejected.
#[test]
fn test_non_struct_rejected() {
    let shape = ShapeDef::from_json_str(r#"{"kind": "list", "fields": []}"#).unwrap();
    let err = shape.build().unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::NotRecord);
}

/// Unknown kind names are rejected with the field position.
#[test]
fn test_unsupported_kind() {
    let shape = ShapeDef::record(vec![
        FieldShape::new("A", "int"),
        FieldShape::new("B", "complex128"),
    ]);
    let err = shape.build().unwrap_err();

    assert_eq!(err.code(), SchemaErrorCode::UnsupportedKind);
    assert_eq!(err.position(), Some(1));
}

/// Composite fields cannot carry an index.
#[test]
fn test_composite_index_rejected() {
    for kind in ["struct", "list", "map"] {
        let shape = ShapeDef::record(vec![FieldShape::new("C", kind).indexed()]);
        let err = shape.build().unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::InvalidIndex, "kind {}", kind);
    }
}

/// Duplicate field names are rejected.
#[test]
fn test_duplicate_field_name() {
    let shape = ShapeDef::record(vec![
        FieldShape::new("A", "int"),
        FieldShape::new("A", "string"),
    ]);
    assert_eq!(shape.build().unwrap_err().code(), SchemaErrorCode::InvalidField);
}

/// Malformed JSON surfaces as a malformed shape.
#[test]
fn test_malformed_shape() {
    let err = ShapeDef::from_json_str("{not json").unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::Malformed);
}

// =============================================================================
// Width Tests
// =============================================================================

/// Narrow integer widths reject out-of-range tokens.
#[test]
fn test_narrow_width_range() {
    let shape = ShapeDef::record(vec![
        FieldShape::new("Small", "int8"),
        FieldShape::new("Byte", "uint8"),
    ]);
    let schema = Arc::new(shape.build().unwrap());
    let config = LoadConfig::default().with_line_terminator("\n");

    assert!(load(schema.clone(), "h\n-128~255\n", &config).is_ok());
    assert!(load(schema.clone(), "h\n128~0\n", &config).is_err());
    assert!(load(schema, "h\n0~-1\n", &config).is_err());
}
