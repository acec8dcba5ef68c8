//! Fluent construction of [`Diagnostic`] values, including source snippets.

use super::{Diagnostic, Handler, Level};
use crate::span::SourceRange;

/// A single rendered source line with a caret underline, attached to a
/// diagnostic for extra context beyond its primary range.
#[derive(Debug, Clone)]
pub struct SourceSnippet {
    pub line: String,
    pub line_number: usize,
    pub start_column: usize,
    pub end_column: usize,
    pub label: Option<String>,
}

impl SourceSnippet {
    pub fn new(line: impl Into<String>, line_number: usize, start_column: usize, end_column: usize) -> Self {
        SourceSnippet { line: line.into(), line_number, start_column, end_column, label: None }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn format(&self) -> String {
        let width = self.end_column.saturating_sub(self.start_column).max(1);
        let mut out = format!(
            "{:>4} | {}\n     | {}{}",
            self.line_number,
            self.line,
            " ".repeat(self.start_column.saturating_sub(1)),
            "^".repeat(width),
        );
        if let Some(label) = &self.label {
            out.push(' ');
            out.push_str(label);
        }
        out
    }
}

/// Builds a [`Diagnostic`] one attribute at a time, then either returns it
/// via [`build`](Self::build) or emits it straight into a [`Handler`] via
/// [`emit`](Self::emit).
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    range: Option<SourceRange>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        DiagnosticBuilder {
            level,
            message: message.into(),
            range: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn range(mut self, range: SourceRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            range: self.range,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    pub fn emit(self, handler: &Handler) {
        handler.emit(self.build());
    }
}
