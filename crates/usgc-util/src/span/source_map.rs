//! Holds input text for named files and converts byte offsets to (row,
//! column), and renders a [`SourceRange`] as a numbered, caret-underlined
//! snippet for diagnostic display.

use super::{SourcePos, SourceRange};
use std::sync::Arc;

/// One file's text plus the byte offset of the start of every line, so an
/// offset can be converted to a (row, column) pair without rescanning.
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: Arc<str>,
    content: Arc<str>,
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    pub fn new(name: impl Into<Arc<str>>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::compute_line_starts(&content);
        SourceFile { name: name.into(), content, line_starts: line_starts.into() }
    }

    fn compute_line_starts(content: &str) -> Vec<usize> {
        let mut starts = vec![0];
        for (i, byte) in content.bytes().enumerate() {
            if byte == b'\n' {
                starts.push(i + 1);
            }
        }
        starts
    }

    pub fn name(&self) -> &Arc<str> {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// 1-indexed line number for a byte offset.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(insertion) => insertion,
        }
    }

    /// 1-indexed line's text, without its trailing newline.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    pub fn extract(&self, range: &SourceRange) -> &str {
        let start = range.begin.bytes.min(self.content.len());
        let end = range.end.bytes.clamp(start, self.content.len());
        &self.content[start..end]
    }

    /// Render `range` as `--> name:row:col` followed by the source line and
    /// a caret underline beneath the offending span.
    pub fn format_range(&self, range: &SourceRange) -> String {
        let line = range.begin.row as usize;
        let text = self.line_text(line).unwrap_or("");
        let col = range.begin.col as usize;
        let width = if range.begin.row == range.end.row {
            (range.end.col as usize).saturating_sub(col).max(1)
        } else {
            1
        };
        let mut out = format!("--> {}:{}:{}\n", self.name, range.begin.row, range.begin.col);
        out.push_str(&format!("{:>4} | {}\n", line, text));
        out.push_str(&format!("     | {}{}\n", " ".repeat(col.saturating_sub(1)), "^".repeat(width)));
        out
    }
}

/// A collection of source files, addressed by name.
#[derive(Debug, Clone, Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    pub fn new() -> Self {
        SourceMap { files: Vec::new() }
    }

    pub fn add_file(&mut self, name: impl Into<Arc<str>>, content: impl Into<Arc<str>>) -> Arc<SourceFile> {
        let file = Arc::new(SourceFile::new(name, content));
        self.files.push(Arc::clone(&file));
        file
    }

    pub fn get(&self, name: &str) -> Option<Arc<SourceFile>> {
        self.files.iter().find(|f| &*f.name == name).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn format_range(&self, range: &SourceRange) -> Option<String> {
        self.get(&range.file_name).map(|f| f.format_range(range))
    }
}

/// Convert a byte offset within `content` into a [`SourcePos`], scanning
/// from the start. Used by the lexer's debug/test helpers; the lexer itself
/// tracks position incrementally rather than calling this per-token.
pub fn pos_at_offset(content: &str, offset: usize) -> SourcePos {
    let mut pos = SourcePos::START;
    for byte in content.bytes().take(offset) {
        pos = pos.advance(byte);
    }
    pos
}
