//! A byte cursor over the input text, tracking row/column/offset as it goes.
//!
//! Unlike a general-purpose-language cursor, this one never decodes UTF-8:
//! the grammar is recognized entirely from ASCII structural bytes (4.1, 6),
//! so every operation here is byte-indexed.

use usgc_util::span::SourcePos;

#[derive(Debug, Clone, Copy)]
pub struct CursorSnapshot {
    pos: SourcePos,
}

/// A read-only walk over `&[u8]`, advancing one byte at a time.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a [u8],
    pos: SourcePos,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor { source: source.as_bytes(), pos: SourcePos::START }
    }

    /// The current byte, or `0` past the end of input.
    pub fn current_byte(&self) -> u8 {
        self.peek_byte(0)
    }

    pub fn peek_byte(&self, offset: usize) -> u8 {
        self.source.get(self.pos.bytes + offset).copied().unwrap_or(0)
    }

    pub fn is_at_end(&self) -> bool {
        self.pos.bytes >= self.source.len()
    }

    /// Consume one byte, updating row/column/offset.
    pub fn advance(&mut self) -> u8 {
        let byte = self.current_byte();
        if !self.is_at_end() {
            self.pos = self.pos.advance(byte);
        }
        byte
    }

    /// Consume `current_byte()` if it equals `expected`.
    pub fn accept_byte(&mut self, expected: u8) -> bool {
        if self.current_byte() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the literal bytes of `expected` if they match starting here,
    /// restoring position on a partial match.
    pub fn accept_bytes(&mut self, expected: &[u8]) -> bool {
        let snapshot = self.snapshot();
        for &byte in expected {
            if !self.accept_byte(byte) {
                self.restore(snapshot);
                return false;
            }
        }
        true
    }

    pub fn pos(&self) -> SourcePos {
        self.pos
    }

    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot { pos: self.pos }
    }

    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.pos = snapshot.pos;
    }

    /// The source slice between two byte offsets (both previously obtained
    /// from this cursor).
    pub fn slice(&self, begin: usize, end: usize) -> &'a str {
        let begin = begin.min(self.source.len());
        let end = end.clamp(begin, self.source.len());
        std::str::from_utf8(&self.source[begin..end]).unwrap_or("")
    }

    /// Advance to just past the next `\n`, or to EOF if there is none.
    pub fn skip_line(&mut self) {
        while !self.is_at_end() && self.current_byte() != b'\n' {
            self.advance();
        }
        if self.current_byte() == b'\n' {
            self.advance();
        }
    }

    /// Consume a run of spaces/tabs, returning how many were consumed.
    pub fn skip_horizontal_whitespace(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.current_byte(), b' ' | b'\t') {
            self.advance();
            count += 1;
        }
        count
    }

    /// Consume a leading-alpha/`_`, alnum/`_`-continuing identifier if one
    /// starts here. Returns its byte range on success, leaving position
    /// unmoved on failure.
    pub fn accept_ident(&mut self) -> Option<(usize, usize)> {
        if !is_ident_start(self.current_byte()) {
            return None;
        }
        let begin = self.pos.bytes;
        self.advance();
        while is_ident_continue(self.current_byte()) {
            self.advance();
        }
        Some((begin, self.pos.bytes))
    }
}

fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
