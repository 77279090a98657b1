//! Schema error types
//!
//! Error codes:
//! - RF_SCHEMA_NOT_RECORD: representative shape is not a flat record
//! - RF_SCHEMA_UNSUPPORTED_KIND: field kind outside the supported set
//! - RF_SCHEMA_INVALID_INDEX: index requested on a composite field
//! - RF_SCHEMA_INVALID_FIELD: duplicate or malformed field declaration
//! - RF_SCHEMA_MALFORMED: shape file could not be read or parsed

use std::fmt;

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Shape is not a struct of named fields
    NotRecord,
    /// Field kind is not supported
    UnsupportedKind,
    /// Field kind cannot be indexed
    InvalidIndex,
    /// Field declaration is inconsistent
    InvalidField,
    /// Shape source is unreadable or not valid JSON
    Malformed,
}

impl SchemaErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::NotRecord => "RF_SCHEMA_NOT_RECORD",
            SchemaErrorCode::UnsupportedKind => "RF_SCHEMA_UNSUPPORTED_KIND",
            SchemaErrorCode::InvalidIndex => "RF_SCHEMA_INVALID_INDEX",
            SchemaErrorCode::InvalidField => "RF_SCHEMA_INVALID_FIELD",
            SchemaErrorCode::Malformed => "RF_SCHEMA_MALFORMED",
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema error type with field context
#[derive(Debug)]
pub struct SchemaError {
    /// Error code
    code: SchemaErrorCode,
    /// Human-readable message
    message: String,
    /// Offending field name, if any
    field: Option<String>,
    /// Offending field position, if any
    position: Option<usize>,
}

impl SchemaError {
    /// Create an error for a shape that is not a flat record
    pub fn not_record(kind: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::NotRecord,
            message: format!("shape must be a struct, got '{}'", kind.into()),
            field: None,
            position: None,
        }
    }

    /// Create an error for an unsupported field kind
    pub fn unsupported_kind(position: usize, field: impl Into<String>, kind: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            code: SchemaErrorCode::UnsupportedKind,
            message: format!("invalid type: {} {}", field, kind.into()),
            field: Some(field),
            position: Some(position),
        }
    }

    /// Create an error for an index requested on a composite field
    pub fn invalid_index(position: usize, field: impl Into<String>, kind: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            code: SchemaErrorCode::InvalidIndex,
            message: format!("could not index {} field {} {}", kind.into(), position, field),
            field: Some(field),
            position: Some(position),
        }
    }

    /// Create an error for an inconsistent field declaration
    pub fn invalid_field(position: usize, field: impl Into<String>, reason: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            code: SchemaErrorCode::InvalidField,
            message: format!("field {} {}: {}", position, field, reason.into()),
            field: Some(field),
            position: Some(position),
        }
    }

    /// Create an error for an unreadable shape source
    pub fn malformed(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::Malformed,
            message: format!("malformed shape '{}': {}", source.into(), reason.into()),
            field: None,
            position: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending field name
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Returns the offending field position
    pub fn position(&self) -> Option<usize> {
        self.position
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
