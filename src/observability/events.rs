//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events emitted by schema construction and loads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Schema built from a representative shape
    SchemaBuilt,
    /// Source file read into memory
    FileRead,
    /// Content split into retained rows
    Tokenized,
    /// Header row discarded
    HeaderDiscarded,
    /// Load published a new record set
    LoadPublished,
    /// Load aborted, store left untouched. The failure itself is reported
    /// by the `LOAD_FAILED` scope event.
    LoadRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SchemaBuilt => "SCHEMA_BUILT",
            Event::FileRead => "FILE_READ",
            Event::Tokenized => "TOKENIZED",
            Event::HeaderDiscarded => "HEADER_DISCARDED",
            Event::LoadPublished => "LOAD_PUBLISHED",
            Event::LoadRejected => "LOAD_REJECTED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::Tokenized | Event::HeaderDiscarded => Severity::Trace,
            Event::SchemaBuilt | Event::FileRead | Event::LoadPublished | Event::LoadRejected => {
                Severity::Info
            }
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
