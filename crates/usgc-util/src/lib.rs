//! Foundation types shared by every phase of the pipeline: source positions
//! and ranges, the source map, and the diagnostic sink.
//!
//! Nothing in this crate knows about tokens or syntax trees; it exists so
//! `usgc-lex`, `usgc-par`, `usgc-chk` and `usgc-drv` can all report
//! diagnostics against the same range/position types without depending on
//! each other.

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, SourceMap, SourcePos, SourceRange};
