//! Error types for misuse of the `usgc-util` APIs themselves (not for the
//! user-facing diagnostic sink, which reports lexical/syntactic/semantic
//! problems in the *input text* rather than programmer error).

use thiserror::Error;

/// Error type for [`crate::span::SourceMap`] operations.
#[derive(Debug, Error)]
pub enum SourceMapError {
    #[error("file not found in source map: {0}")]
    FileNotFound(String),

    #[error("span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        file_len: usize,
        span_start: usize,
        span_end: usize,
    },

    #[error("invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },
}

pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
