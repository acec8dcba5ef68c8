//! Diagnostics: the write-only, append-only sink the lexer, parser and
//! checker all report into.
//!
//! ```
//! use usgc_util::diagnostic::{Handler, DiagnosticBuilder};
//! use usgc_util::span::{SourceRange, SourcePos};
//!
//! let handler = Handler::new();
//! let range = SourceRange::point("help.txt".into(), SourcePos::START);
//! DiagnosticBuilder::error("unexpected token")
//!     .range(range)
//!     .emit(&handler);
//! assert!(handler.has_errors());
//! ```

mod builder;

pub use builder::{DiagnosticBuilder, SourceSnippet};

use crate::span::SourceRange;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Note,
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        };
        write!(f, "{s}")
    }
}

/// A single diagnostic: a message at a severity, optionally anchored to a
/// [`SourceRange`], with attached notes/helps/snippets.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub range: Option<SourceRange>,
    pub notes: Vec<String>,
    pub helps: Vec<String>,
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Diagnostic {
            level,
            message: message.into(),
            range: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Render per the wire format `error in <file>(<row>:<col> - <row>:<col>): <message>`.
    pub fn format_line(&self) -> String {
        match &self.range {
            Some(range) => format!("{} in {}: {}", self.level, range, self.message),
            None => format!("{}: {}", self.level, self.message),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_line())?;
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        for help in &self.helps {
            write!(f, "\n  help: {help}")?;
        }
        for snippet in &self.snippets {
            write!(f, "\n{}", snippet.format())?;
        }
        Ok(())
    }
}

/// The append-only diagnostic sink shared by the lexer, parser and checker
/// for the duration of one parse session. `RefCell` because diagnostics are
/// emitted through shared `&Handler` references held by several components
/// at once, never mutably borrowed across a call boundary.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Handler { diagnostics: RefCell::new(Vec::new()) }
    }

    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level == Level::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().iter().filter(|d| d.level == Level::Error).count()
    }

    /// All diagnostics recorded so far, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
