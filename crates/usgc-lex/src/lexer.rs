//! The lexer: classifies bytes into the closed token tag set (spec 4.1).
//!
//! The lexer never raises; a stray byte simply becomes an `Unknown` token
//! for the parser to diagnose in context, so `Lexer` carries no diagnostic
//! sink of its own.

use std::sync::Arc;

use usgc_util::span::{SourcePos, SourceRange};

use crate::cursor::Cursor;
use crate::token::{Tag, Token};

/// Turns source text into a stream of [`Token`]s, one token of lookahead at
/// a time (the parser pulls; the lexer never buffers more than it's asked
/// for).
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    file_name: Arc<str>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file_name: impl Into<Arc<str>>) -> Self {
        Lexer { cursor: Cursor::new(source), file_name: file_name.into() }
    }

    /// Advance to the next newline without emitting tokens (used by the
    /// parser while skipping preamble/narrative lines).
    pub fn skip_line(&mut self) {
        self.cursor.skip_line();
    }

    /// The cursor's current position, for callers that need to capture raw
    /// source ranges spanning several `next_token` calls (description text).
    pub fn pos(&self) -> SourcePos {
        self.cursor.pos()
    }

    fn range(&self, begin: SourcePos) -> SourceRange {
        SourceRange::new(Arc::clone(&self.file_name), begin, self.cursor.pos())
    }

    fn make(&self, begin: SourcePos, separated: bool, tag: Tag) -> Token {
        Token::new(tag, self.range(begin), separated)
    }

    /// Try to splice one argument onto the option token just lexed: a
    /// separator byte (`sep`, or `other_sep` if nonzero and `sep` didn't
    /// match) followed by an all-upper identifier or a `<ident>` form.
    /// Leaves the cursor unmoved if no argument is spliced.
    fn accept_arg(&mut self, sep: u8, other_sep: u8) -> bool {
        let before = self.cursor.snapshot();
        if !self.cursor.accept_byte(sep) && (other_sep == 0 || !self.cursor.accept_byte(other_sep)) {
            return false;
        }
        let after_sep = self.cursor.snapshot();
        if let Some((begin, end)) = self.cursor.accept_ident() {
            if is_all_upper(self.cursor.slice(begin, end)) {
                return true;
            }
        }
        self.cursor.restore(after_sep);
        if self.cursor.accept_byte(b'<') && self.cursor.accept_ident().is_some() && self.cursor.accept_byte(b'>') {
            return true;
        }
        self.cursor.restore(before);
        false
    }

    /// Classify and consume the next token (spec 4.1's recognition rules,
    /// applied in order; first match wins).
    pub fn next_token(&mut self) -> Token {
        let separated = self.cursor.skip_horizontal_whitespace() >= 2;
        let begin = self.cursor.pos();

        if self.cursor.is_at_end() {
            return self.make(begin, separated, Tag::End);
        }
        if self.cursor.accept_byte(b'\n') {
            return self.make(begin, separated, Tag::Nl);
        }
        if self.cursor.accept_byte(b'[') {
            return self.make(begin, separated, Tag::Lbracket);
        }
        if self.cursor.accept_byte(b']') {
            return self.make(begin, separated, Tag::Rbracket);
        }
        if self.cursor.accept_byte(b'(') {
            return self.make(begin, separated, Tag::Lparen);
        }
        if self.cursor.accept_byte(b')') {
            return self.make(begin, separated, Tag::Rparen);
        }
        if self.cursor.accept_byte(b'|') {
            return self.make(begin, separated, Tag::Or);
        }
        if self.cursor.accept_bytes(b"...") {
            return self.make(begin, separated, Tag::Dots);
        }
        if self.cursor.accept_byte(b':') || self.cursor.accept_byte(b'=') {
            return self.make(begin, separated, Tag::Colon);
        }
        if self.cursor.accept_byte(b',') {
            return self.make(begin, separated, Tag::Comma);
        }
        if let Some((ident_begin, ident_end)) = self.cursor.accept_ident() {
            let text = self.cursor.slice(ident_begin, ident_end);
            if text.len() == 5 && text.eq_ignore_ascii_case("usage") && self.cursor.accept_byte(b':') {
                return self.make(begin, separated, Tag::Usage);
            }
            let tag = if is_all_upper(text) { Tag::Upperarg } else { Tag::Ident };
            return self.make(begin, separated, tag);
        }
        if self.cursor.accept_byte(b'<') {
            if self.cursor.accept_ident().is_some() && self.cursor.accept_byte(b'>') {
                return self.make(begin, separated, Tag::Delimarg);
            }
            return self.make(begin, separated, Tag::Unknown);
        }
        if self.cursor.accept_byte(b'-') {
            if self.cursor.accept_ident().is_some() {
                self.accept_arg(b' ', 0);
                return self.make(begin, separated, Tag::Sopt);
            }
            if self.cursor.accept_byte(b'-') {
                if self.cursor.accept_ident().is_some() {
                    self.accept_arg(b'=', b' ');
                    return self.make(begin, separated, Tag::Lopt);
                }
                return self.make(begin, separated, Tag::Ddash);
            }
            return self.make(begin, separated, Tag::Dash);
        }

        self.cursor.advance();
        self.make(begin, separated, Tag::Unknown)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.tag == Tag::End {
            None
        } else {
            Some(token)
        }
    }
}

fn is_all_upper(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_alphabetic())
        && text.bytes().all(|b| !b.is_ascii_alphabetic() || b.is_ascii_uppercase())
}
