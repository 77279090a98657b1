//! Load error types
//!
//! Error codes:
//! - RF_IO_ERROR: source could not be opened or read
//! - RF_CONFIG_ERROR: load configuration could not be parsed
//! - RF_FORMAT_ERROR: row token count differs from the schema field count
//! - RF_COERCION_ERROR: token could not be converted to the field kind
//! - RF_DUPLICATE_INDEX: indexed value already present
//! - RF_OUT_OF_RANGE: record position outside the store
//! - RF_CONVERSION_ERROR: record could not be converted to a caller type
//!
//! Row numbers count data rows from 1; the discarded header is row 0.
//! Column numbers are 0-based.

use std::fmt;
use std::io;

/// Load-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorCode {
    Io,
    Config,
    Format,
    Coercion,
    DuplicateIndex,
    OutOfRange,
    Conversion,
}

impl LoadErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            LoadErrorCode::Io => "RF_IO_ERROR",
            LoadErrorCode::Config => "RF_CONFIG_ERROR",
            LoadErrorCode::Format => "RF_FORMAT_ERROR",
            LoadErrorCode::Coercion => "RF_COERCION_ERROR",
            LoadErrorCode::DuplicateIndex => "RF_DUPLICATE_INDEX",
            LoadErrorCode::OutOfRange => "RF_OUT_OF_RANGE",
            LoadErrorCode::Conversion => "RF_CONVERSION_ERROR",
        }
    }
}

impl fmt::Display for LoadErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Load error with row/column localization
#[derive(Debug)]
pub struct LoadError {
    code: LoadErrorCode,
    message: String,
    row: Option<usize>,
    column: Option<usize>,
    field: Option<String>,
    token: Option<String>,
    expected: Option<usize>,
    observed: Option<usize>,
    source: Option<io::Error>,
}

impl LoadError {
    fn new(code: LoadErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            row: None,
            column: None,
            field: None,
            token: None,
            expected: None,
            observed: None,
            source: None,
        }
    }

    /// Create an I/O error
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        let mut err = Self::new(LoadErrorCode::Io, message.into());
        err.source = Some(source);
        err
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(LoadErrorCode::Config, message.into())
    }

    /// Create a field count mismatch error
    pub fn field_count_mismatch(row: usize, observed: usize, expected: usize) -> Self {
        let mut err = Self::new(
            LoadErrorCode::Format,
            format!(
                "line {}, field count mismatch: {} (file) {} (schema)",
                row, observed, expected
            ),
        );
        err.row = Some(row);
        err.observed = Some(observed);
        err.expected = Some(expected);
        err
    }

    /// Create a coercion error for one field of one row
    pub fn coercion(
        row: usize,
        column: usize,
        field: impl Into<String>,
        token: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let field = field.into();
        let mut err = Self::new(
            LoadErrorCode::Coercion,
            format!(
                "parse field (row={}, col={}, field={}) error: {}",
                row,
                column,
                field,
                reason.into()
            ),
        );
        err.row = Some(row);
        err.column = Some(column);
        err.field = Some(field);
        err.token = Some(token.into());
        err
    }

    /// Create a duplicate index key error
    pub fn duplicate_index(row: usize, column: usize, field: impl Into<String>, key: impl Into<String>) -> Self {
        let field = field.into();
        let key = key.into();
        let mut err = Self::new(
            LoadErrorCode::DuplicateIndex,
            format!(
                "index error: duplicate {} at (row={}, col={}, field={})",
                key, row, column, field
            ),
        );
        err.row = Some(row);
        err.column = Some(column);
        err.field = Some(field);
        err.token = Some(key);
        err
    }

    /// Create an out-of-range record position error
    pub fn out_of_range(position: usize, count: usize) -> Self {
        let mut err = Self::new(
            LoadErrorCode::OutOfRange,
            format!("record position {} out of range (count {})", position, count),
        );
        err.expected = Some(count);
        err.observed = Some(position);
        err
    }

    /// Create a typed conversion error
    pub fn conversion(position: usize, reason: impl Into<String>) -> Self {
        Self::new(
            LoadErrorCode::Conversion,
            format!("record {} conversion failed: {}", position, reason.into()),
        )
    }

    /// Returns the error code
    pub fn code(&self) -> LoadErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Data row number (1-based), if applicable
    pub fn row(&self) -> Option<usize> {
        self.row
    }

    /// Column position (0-based), if applicable
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    /// Field name, if applicable
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Offending token or key, if applicable
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Expected count: schema field count, or store record count
    pub fn expected(&self) -> Option<usize> {
        self.expected
    }

    /// Observed count: row token count, or requested position
    pub fn observed(&self) -> Option<usize> {
        self.observed
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)?;
        if let Some(ref source) = self.source {
            write!(f, " (caused by: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for load operations
pub type LoadResult<T> = Result<T, LoadError>;
