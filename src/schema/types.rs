//! Schema type definitions
//!
//! Supported kinds:
//! - bool
//! - int8..int64 / uint8..uint64 (bit width carried on the kind)
//! - float32 / float64
//! - string
//! - composite: struct, list and map values carried as embedded JSON

use std::collections::HashSet;
use std::fmt;

use super::errors::{SchemaError, SchemaResult};

/// Bit width of an integer field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    /// Number of bits
    pub fn bits(&self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }
}

/// Bit width of a floating point field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    W32,
    W64,
}

impl FloatWidth {
    /// Number of bits
    pub fn bits(&self) -> u32 {
        match self {
            FloatWidth::W32 => 32,
            FloatWidth::W64 => 64,
        }
    }
}

/// Structured kinds decoded from an embedded JSON literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositeKind {
    /// JSON object. Declared members are type-checked, undeclared ones
    /// are ignored; with no members any object is accepted.
    Struct(Vec<(String, TypeKind)>),
    /// JSON array, optionally with a declared element kind
    List(Option<Box<TypeKind>>),
    /// JSON object, optionally with a declared value kind
    Map(Option<Box<TypeKind>>),
}

impl CompositeKind {
    /// Returns the kind name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CompositeKind::Struct(_) => "struct",
            CompositeKind::List(_) => "list",
            CompositeKind::Map(_) => "map",
        }
    }
}

/// Closed set of field kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    Bool,
    Int(IntWidth),
    Uint(IntWidth),
    Float(FloatWidth),
    String,
    Composite(CompositeKind),
}

impl TypeKind {
    /// Shorthand for a 64-bit signed integer
    pub fn int() -> Self {
        TypeKind::Int(IntWidth::W64)
    }

    /// Shorthand for a 64-bit unsigned integer
    pub fn uint() -> Self {
        TypeKind::Uint(IntWidth::W64)
    }

    /// Shorthand for a 64-bit float
    pub fn float() -> Self {
        TypeKind::Float(FloatWidth::W64)
    }

    /// Shorthand for a struct with declared members
    pub fn struct_of(members: Vec<(String, TypeKind)>) -> Self {
        TypeKind::Composite(CompositeKind::Struct(members))
    }

    /// Shorthand for a list with a declared element kind
    pub fn list_of(element: TypeKind) -> Self {
        TypeKind::Composite(CompositeKind::List(Some(Box::new(element))))
    }

    /// Shorthand for a map with a declared value kind
    pub fn map_of(value: TypeKind) -> Self {
        TypeKind::Composite(CompositeKind::Map(Some(Box::new(value))))
    }

    /// Returns true for kinds decoded from structured literals
    pub fn is_composite(&self) -> bool {
        matches!(self, TypeKind::Composite(_))
    }

    /// Returns true if blank tokens coerce to zero for this kind
    pub fn is_numeric(&self) -> bool {
        matches!(self, TypeKind::Int(_) | TypeKind::Uint(_) | TypeKind::Float(_))
    }

    /// Returns the type name for error messages
    pub fn type_name(&self) -> String {
        match self {
            TypeKind::Bool => "bool".to_string(),
            TypeKind::Int(w) => format!("int{}", w.bits()),
            TypeKind::Uint(w) => format!("uint{}", w.bits()),
            TypeKind::Float(w) => format!("float{}", w.bits()),
            TypeKind::String => "string".to_string(),
            TypeKind::Composite(c) => c.type_name().to_string(),
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Composite(CompositeKind::List(Some(elem))) => write!(f, "list<{}>", elem),
            TypeKind::Composite(CompositeKind::Map(Some(value))) => write!(f, "map<{}>", value),
            TypeKind::Composite(CompositeKind::Struct(members)) if !members.is_empty() => {
                write!(f, "struct{{")?;
                for (i, (name, kind)) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} {}", name, kind)?;
                }
                write!(f, "}}")
            }
            other => write!(f, "{}", other.type_name()),
        }
    }
}

/// One column of a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name
    name: String,
    /// Declared kind
    kind: TypeKind,
    /// Whether a unique index is built over this field
    indexed: bool,
    /// Physical column position (0-based)
    column: usize,
}

impl FieldDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    pub fn is_indexed(&self) -> bool {
        self.indexed
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

/// Immutable ordered list of field descriptors.
///
/// Field count, order and kinds are fixed once built. Index slots follow
/// the declaration order of the indexed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldDescriptor>,
    indexed: Vec<usize>,
}

impl Schema {
    /// Starts a programmatic schema declaration
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Validates `(name, kind, indexed)` declarations into a schema
    pub(crate) fn from_declarations(decls: Vec<(String, TypeKind, bool)>) -> SchemaResult<Self> {
        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(decls.len());
        let mut indexed = Vec::new();

        for (column, (name, kind, index)) in decls.into_iter().enumerate() {
            if name.is_empty() {
                return Err(SchemaError::invalid_field(column, name, "empty field name"));
            }
            if !seen.insert(name.clone()) {
                return Err(SchemaError::invalid_field(column, name, "duplicate field name"));
            }
            if index {
                if let TypeKind::Composite(c) = &kind {
                    return Err(SchemaError::invalid_index(column, name, c.type_name()));
                }
                indexed.push(column);
            }
            fields.push(FieldDescriptor {
                name,
                kind,
                indexed: index,
                column,
            });
        }

        Ok(Self { fields, indexed })
    }

    /// Returns all fields in column order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Returns the field at a column position
    pub fn field(&self, column: usize) -> Option<&FieldDescriptor> {
        self.fields.get(column)
    }

    /// Returns the column position of a named field
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Number of fields (expected tokens per data row)
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Column positions of indexed fields, in slot order
    pub fn indexed_positions(&self) -> &[usize] {
        &self.indexed
    }

    /// Number of indexes a load builds
    pub fn index_count(&self) -> usize {
        self.indexed.len()
    }
}

/// Builder for declaring a schema in code
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    decls: Vec<(String, TypeKind, bool)>,
}

impl SchemaBuilder {
    /// Adds an unindexed field
    pub fn field(mut self, name: impl Into<String>, kind: TypeKind) -> Self {
        self.decls.push((name.into(), kind, false));
        self
    }

    /// Adds a field with a unique index
    pub fn indexed(mut self, name: impl Into<String>, kind: TypeKind) -> Self {
        self.decls.push((name.into(), kind, true));
        self
    }

    /// Validates the declarations
    pub fn build(self) -> SchemaResult<Schema> {
        Schema::from_declarations(self.decls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaErrorCode;

    #[test]
    fn test_builder_assigns_columns_and_slots() {
        let schema = Schema::builder()
            .field("Name", TypeKind::String)
            .indexed("Id", TypeKind::int())
            .field("Score", TypeKind::float())
            .indexed("Code", TypeKind::String)
            .build()
            .unwrap();

        assert_eq!(schema.len(), 4);
        assert_eq!(schema.indexed_positions(), &[1, 3]);
        assert_eq!(schema.field(2).unwrap().column(), 2);
        assert_eq!(schema.position_of("Code"), Some(3));
        assert_eq!(schema.position_of("Missing"), None);
    }

    #[test]
    fn test_composite_cannot_be_indexed() {
        let err = Schema::builder()
            .field("Name", TypeKind::String)
            .indexed("Tags", TypeKind::list_of(TypeKind::String))
            .build()
            .unwrap_err();

        assert_eq!(err.code(), SchemaErrorCode::InvalidIndex);
        assert_eq!(err.position(), Some(1));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = Schema::builder()
            .field("A", TypeKind::Bool)
            .field("A", TypeKind::String)
            .build()
            .unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::InvalidField);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(TypeKind::Int(IntWidth::W16).type_name(), "int16");
        assert_eq!(TypeKind::Uint(IntWidth::W8).type_name(), "uint8");
        assert_eq!(TypeKind::Float(FloatWidth::W32).type_name(), "float32");
        assert_eq!(TypeKind::list_of(TypeKind::int()).to_string(), "list<int64>");
        let point = TypeKind::struct_of(vec![
            ("X".to_string(), TypeKind::int()),
            ("Tags".to_string(), TypeKind::list_of(TypeKind::String)),
        ]);
        assert_eq!(point.to_string(), "struct{X int64, Tags list<string>}");
        assert_eq!(TypeKind::struct_of(Vec::new()).to_string(), "struct");
        assert!(TypeKind::uint().is_numeric());
        assert!(!TypeKind::String.is_numeric());
    }
}
