//! The closed token tag set and the `Token` value the lexer produces.

use usgc_util::span::SourceRange;

/// The closed set of token kinds recognized by the lexer (spec 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Unknown,
    End,
    Nl,
    Comma,
    Or,
    Dots,
    Colon,
    Ident,
    Upperarg,
    Delimarg,
    Usage,
    Dash,
    Ddash,
    Sopt,
    Lopt,
    Lbracket,
    Rbracket,
    Lparen,
    Rparen,
}

impl Tag {
    /// Human-readable name used in "expected X" diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            Tag::Unknown => "invalid token",
            Tag::End => "end-of-file",
            Tag::Nl => "new line",
            Tag::Comma => "','",
            Tag::Or => "'|'",
            Tag::Dots => "'...'",
            Tag::Colon => "':'",
            Tag::Ident => "identifier",
            Tag::Upperarg => "uppercase argument",
            Tag::Delimarg => "delimited argument",
            Tag::Usage => "usage section start",
            Tag::Dash => "'-'",
            Tag::Ddash => "'--'",
            Tag::Sopt => "short option",
            Tag::Lopt => "long option",
            Tag::Lbracket => "'['",
            Tag::Rbracket => "']'",
            Tag::Lparen => "'('",
            Tag::Rparen => "')'",
        }
    }
}

/// One lexical unit: its tag, its source range, and whether it was preceded
/// by two or more horizontal-whitespace bytes (spec 3, 4.1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub tag: Tag,
    pub range: SourceRange,
    pub separated: bool,
}

impl Token {
    pub fn new(tag: Tag, range: SourceRange, separated: bool) -> Self {
        Token { tag, range, separated }
    }
}
