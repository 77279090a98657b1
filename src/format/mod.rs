//! Record file format
//!
//! Plain text:
//! - rows separated by a configurable terminator (default `!####!\n`)
//! - fields separated by a configurable delimiter (default `~`)
//! - rows starting with the comment marker (default `#`) are dropped
//! - the first retained row is a header and is discarded before decoding

mod config;
mod tokenizer;

pub use config::{
    LoadConfig, DEFAULT_COMMENT_MARKER, DEFAULT_FIELD_DELIMITER, DEFAULT_LINE_TERMINATOR,
};
pub use tokenizer::{split_header, tokenize, tokenize_file, TokenizedFile};
