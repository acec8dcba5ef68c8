//! The recursive-descent parser: one token of lookahead, builds the tree
//! defined in [`crate::ast`]. The usage-line grammar (or/repeat/elem/group)
//! and the token bookkeeping (`skip_token`/`make_syntax`/`parse_many`) are
//! grounded on the reference parser this grammar was distilled from; the
//! preamble and description-block passes have no such counterpart and are
//! written directly from this crate's own design.

use std::sync::Arc;

use usgc_lex::{Lexer, Tag, Token};
use usgc_util::diagnostic::{DiagnosticBuilder, Handler};
use usgc_util::span::SourcePos;

use crate::arena::ParseSession;
use crate::ast::{
    ArgData, CommandData, DescData, GroupData, Node, OptionData, OrData, RangeOnly, RepeatData,
    RootData, UsageData,
};

/// Parse `text` (from `file_name`) into a [`Node::Root`] borrowed from
/// `session`. Diagnostics are reported to `handler` as they're found; the
/// caller decides whether `handler.has_errors()` should abort the pipeline.
pub fn parse<'s>(
    session: &'s ParseSession,
    text: &'s str,
    file_name: impl Into<Arc<str>>,
    handler: &'s Handler,
) -> &'s Node<'s> {
    let file_name = file_name.into();
    let lexer = Lexer::new(text, Arc::clone(&file_name));
    let mut parser = Parser {
        session,
        lexer,
        handler,
        file_name,
        text,
        ahead: Token::new(Tag::End, usgc_util::span::SourceRange::point(Arc::from(""), SourcePos::START), false),
        prev_end: SourcePos::START,
    };
    parser.ahead = parser.lexer.next_token();
    parser.parse_root()
}

struct Parser<'s> {
    session: &'s ParseSession,
    lexer: Lexer<'s>,
    handler: &'s Handler,
    file_name: Arc<str>,
    text: &'s str,
    ahead: Token,
    prev_end: SourcePos,
}

impl<'s> Parser<'s> {
    fn skip_token(&mut self) {
        self.prev_end = self.ahead.range.end;
        self.ahead = self.lexer.next_token();
    }

    fn accept_token(&mut self, tag: Tag) -> bool {
        if self.ahead.tag == tag {
            self.skip_token();
            true
        } else {
            false
        }
    }

    fn eat_token(&mut self, tag: Tag) {
        debug_assert_eq!(self.ahead.tag, tag);
        self.skip_token();
    }

    fn error_on_token(&mut self, context: &str) {
        let message = if matches!(self.ahead.tag, Tag::Nl | Tag::End) {
            format!("expected {}, but got {}", context, self.ahead.tag.display_name())
        } else {
            let text = &self.text[self.ahead.range.begin.bytes..self.ahead.range.end.bytes];
            format!("expected {}, but got '{}'", context, text)
        };
        DiagnosticBuilder::error(message).range(self.ahead.range.clone()).emit(self.handler);
        self.skip_token();
    }

    fn expect_token(&mut self, tag: Tag) -> bool {
        if self.accept_token(tag) {
            true
        } else {
            self.error_on_token(tag.display_name());
            false
        }
    }

    fn parse_error(&mut self, context: &str) -> &'s Node<'s> {
        let begin = self.ahead.range.begin;
        self.error_on_token(context);
        let range = self.range(begin);
        self.session.alloc(Node::Error(RangeOnly { range }))
    }

    /// A range spanning from `begin` to `prev_end` — called once the
    /// caller has already consumed everything the node covers.
    fn range(&self, begin: SourcePos) -> usgc_util::span::SourceRange {
        usgc_util::span::SourceRange::new(Arc::clone(&self.file_name), begin, self.prev_end)
    }

    fn parse_ident(&mut self) -> &'s str {
        let text = &self.text[self.ahead.range.begin.bytes..self.ahead.range.end.bytes];
        self.expect_token(Tag::Ident);
        text
    }

    /// Parse a sequence of `parse_one` productions until `stop`. `END`
    /// always terminates the loop too, even if `stop` never shows up, so an
    /// unterminated group can't spin forever re-diagnosing an empty tail;
    /// hitting `END` first contributes one Error node of its own so the
    /// caller can tell the list was cut short.
    fn parse_many(&mut self, stop: Tag, parse_one: impl Fn(&mut Self) -> &'s Node<'s>) -> Vec<&'s Node<'s>> {
        let mut elems = Vec::new();
        while self.ahead.tag != stop {
            if self.ahead.tag == Tag::End {
                elems.push(self.parse_error("option or positional argument"));
                break;
            }
            elems.push(parse_one(self));
        }
        elems
    }

    fn parse_arg(&mut self) -> &'s Node<'s> {
        let begin = self.ahead.range.begin;
        let skip = if self.ahead.tag == Tag::Delimarg { 1 } else { 0 };
        let name = &self.text[self.ahead.range.begin.bytes + skip..self.ahead.range.end.bytes - skip];
        self.skip_token();
        let range = self.range(begin);
        self.session.alloc(Node::Arg(ArgData { range, name }))
    }

    fn parse_opt(&mut self) -> &'s Node<'s> {
        let begin = self.ahead.range.begin;
        let is_short = self.ahead.tag == Tag::Sopt;
        let skip = if is_short { 1 } else { 2 };
        let raw = &self.text[self.ahead.range.begin.bytes + skip..self.ahead.range.end.bytes];
        self.eat_token(if is_short { Tag::Sopt } else { Tag::Lopt });

        let (name, arg) = split_option_name_and_arg(raw);
        let range = self.range(begin);
        self.session.alloc(Node::Option(OptionData { range, is_short, name, arg }))
    }

    fn parse_command_like(&mut self) -> &'s Node<'s> {
        let begin = self.ahead.range.begin;
        match self.ahead.tag {
            Tag::Dash => {
                self.skip_token();
                let range = self.range(begin);
                self.session.alloc(Node::Stdin(RangeOnly { range }))
            }
            Tag::Ddash => {
                self.skip_token();
                let range = self.range(begin);
                self.session.alloc(Node::Sep(RangeOnly { range }))
            }
            _ => {
                let name = self.parse_ident();
                let range = self.range(begin);
                self.session.alloc(Node::Command(CommandData { range, name }))
            }
        }
    }

    fn parse_parens(&mut self) -> &'s Node<'s> {
        let begin = self.ahead.range.begin;
        self.eat_token(Tag::Lparen);
        let elems = self.parse_many(Tag::Rparen, Self::parse_or);
        self.expect_token(Tag::Rparen);
        let range = self.range(begin);
        self.session.alloc(Node::Parens(GroupData { range, elems }))
    }

    fn parse_brackets(&mut self) -> &'s Node<'s> {
        let begin = self.ahead.range.begin;
        self.eat_token(Tag::Lbracket);
        let elems = self.parse_many(Tag::Rbracket, Self::parse_or);
        self.expect_token(Tag::Rbracket);
        let range = self.range(begin);
        self.session.alloc(Node::Brackets(GroupData { range, elems }))
    }

    fn parse_elem(&mut self) -> &'s Node<'s> {
        match self.ahead.tag {
            Tag::Ident | Tag::Dash | Tag::Ddash => self.parse_command_like(),
            Tag::Sopt | Tag::Lopt => self.parse_opt(),
            Tag::Upperarg | Tag::Delimarg => self.parse_arg(),
            Tag::Lparen => self.parse_parens(),
            Tag::Lbracket => self.parse_brackets(),
            _ => self.parse_error("option or positional argument"),
        }
    }

    fn parse_repeat(&mut self) -> &'s Node<'s> {
        let begin = self.ahead.range.begin;
        let elem = self.parse_elem();
        if !self.accept_token(Tag::Dots) {
            return elem;
        }
        let range = self.range(begin);
        self.session.alloc(Node::Repeat(RepeatData { range, elem }))
    }

    fn parse_or(&mut self) -> &'s Node<'s> {
        let begin = self.ahead.range.begin;
        let first = self.parse_repeat();
        let mut elems = vec![first];
        while self.accept_token(Tag::Or) {
            elems.push(self.parse_repeat());
        }
        if elems.len() == 1 {
            return elems.pop().unwrap();
        }
        let range = self.range(begin);
        self.session.alloc(Node::Or(OrData { range, elems }))
    }

    fn parse_usage(&mut self) -> &'s Node<'s> {
        let begin = self.ahead.range.begin;
        let prog = self.parse_ident();
        let elems = self.parse_many(Tag::Nl, Self::parse_or);
        self.expect_token(Tag::Nl);
        let range = self.range(begin);
        self.session.alloc(Node::Usage(UsageData { range, prog, elems }))
    }

    /// Scan forward from the top of the file to the `USAGE:` keyword,
    /// skipping any narrative lines ahead of it. Returns the preamble text
    /// (everything before the keyword) if found.
    fn locate_usage(&mut self) -> Option<&'s str> {
        loop {
            while self.accept_token(Tag::Nl) {}
            if self.ahead.tag == Tag::End {
                return None;
            }
            if self.ahead.tag == Tag::Usage {
                break;
            }
            self.lexer.skip_line();
            self.skip_token();
        }
        let info = self.text[..self.ahead.range.begin.bytes.min(self.text.len())].trim_end_matches('\n');
        self.eat_token(Tag::Usage);
        self.accept_token(Tag::Nl);
        Some(info)
    }

    /// Read the remainder of the current line plus every following line
    /// whose first token is none of `NL`/`END`/`SOPT`/`LOPT`, joining them
    /// with `\n`. Used for a description's free-text body.
    fn capture_desc_text(&mut self) -> String {
        let mut lines = Vec::new();
        loop {
            if matches!(self.ahead.tag, Tag::Nl | Tag::End | Tag::Sopt | Tag::Lopt) {
                break;
            }
            let line_start = self.ahead.range.begin.bytes;
            self.lexer.skip_line();
            let mut line_end = self.lexer.pos().bytes;
            if line_end > line_start && self.text.as_bytes().get(line_end - 1) == Some(&b'\n') {
                line_end -= 1;
            }
            lines.push(&self.text[line_start..line_end]);
            self.prev_end = self.ahead.range.end;
            self.ahead = self.lexer.next_token();
        }
        lines.join("\n")
    }

    fn parse_desc(&mut self) -> &'s Node<'s> {
        let begin = self.ahead.range.begin;
        let mut options = vec![self.parse_opt()];
        loop {
            if self.ahead.separated {
                break;
            }
            match self.ahead.tag {
                Tag::Comma => self.skip_token(),
                Tag::Sopt | Tag::Lopt => options.push(self.parse_opt()),
                _ => break,
            }
        }
        let raw_info = self.capture_desc_text();
        let (info, default_val, unterminated) = extract_default_value(&raw_info);
        let range = self.range(begin);
        if unterminated {
            DiagnosticBuilder::error("unterminated default value specifier")
                .range(range.clone())
                .emit(self.handler);
        }
        self.session.alloc(Node::Desc(DescData { range, options, info, default_val }))
    }

    fn parse_root(&mut self) -> &'s Node<'s> {
        let begin = self.ahead.range.begin;
        let Some(info) = self.locate_usage() else {
            return self.parse_error("usage or option list");
        };

        let mut usages = vec![self.parse_usage()];
        while self.ahead.tag == Tag::Ident {
            usages.push(self.parse_usage());
        }

        let mut descs = Vec::new();
        while self.ahead.tag != Tag::End {
            if self.accept_token(Tag::Nl) {
                continue;
            }
            if matches!(self.ahead.tag, Tag::Sopt | Tag::Lopt) {
                descs.push(self.parse_desc());
            } else {
                self.lexer.skip_line();
                self.skip_token();
            }
        }

        let range = self.range(begin);
        self.session.alloc(Node::Root(RootData { range, info, usages, descs }))
    }
}

/// Split an option's raw name/argument text (already stripped of its
/// leading dash(es)) on the first `=` or space, then trim a surrounding
/// `<...>` from the argument half if present.
fn split_option_name_and_arg(raw: &str) -> (&str, Option<&str>) {
    let Some(idx) = raw.find(['=', ' ']) else {
        return (raw, None);
    };
    let name = &raw[..idx];
    let rest = raw[idx + 1..].trim_start_matches('<');
    let arg = rest.split(['<', '>']).next().unwrap_or(rest);
    (name, Some(arg))
}

/// Pull a `[default: VALUE]` specifier out of a description's free text,
/// returning the text with the specifier itself removed so the printer
/// doesn't duplicate the value when it renders its own `# defaults to`
/// comment. Also returns the value (if any) and whether the specifier was
/// unterminated (no closing `]`, in which case the value runs up to the
/// next whitespace and the stripped text drops everything from the marker
/// on, since there's no closing delimiter to resume after).
fn extract_default_value(info: &str) -> (String, Option<String>, bool) {
    const MARKER: &str = "[default:";
    let Some(idx) = info.find(MARKER) else {
        return (info.to_string(), None, false);
    };
    let after = &info[idx + MARKER.len()..];
    let trimmed = after.trim_start_matches([' ', '\t']);
    let skipped = after.len() - trimmed.len();
    if let Some(end) = trimmed.find(']') {
        let marker_end = idx + MARKER.len() + skipped + end + 1;
        let stripped = format!("{}{}", &info[..idx], &info[marker_end..]);
        (stripped.trim_end().to_string(), Some(trimmed[..end].to_string()), false)
    } else {
        let ws = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let stripped = info[..idx].trim_end().to_string();
        (stripped, Some(trimmed[..ws].to_string()), true)
    }
}
