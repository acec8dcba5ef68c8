//! Edge case tests for usgc-lex.

use crate::{Lexer, Tag};

fn tags(source: &str) -> Vec<Tag> {
    Lexer::new(source, "t").map(|t| t.tag).collect()
}

/// EDGE CASE: empty input yields no tokens before END.
#[test]
fn test_edge_empty_source() {
    assert_eq!(tags(""), Vec::<Tag>::new());
}

/// EDGE CASE: input of only whitespace yields no tokens (no NL, no content).
#[test]
fn test_edge_whitespace_only() {
    assert_eq!(tags("   \t  "), Vec::<Tag>::new());
}

/// EDGE CASE: a run of blank lines yields one NL per line.
#[test]
fn test_edge_blank_lines_yield_newlines() {
    assert_eq!(tags("\n\n\n"), vec![Tag::Nl, Tag::Nl, Tag::Nl]);
}

/// EDGE CASE: `<` not followed by a well-formed identifier is UNKNOWN,
/// consuming only the `<` byte, so lexing can continue on what follows.
#[test]
fn test_edge_malformed_delimarg_recovers_byte_by_byte() {
    assert_eq!(tags("<>"), vec![Tag::Unknown, Tag::Unknown]);
}

/// EDGE CASE: an unterminated `<ident` with no closing `>` is UNKNOWN and
/// consumes through the identifier, not just the `<`.
#[test]
fn test_edge_unterminated_delimarg() {
    let tokens: Vec<_> = Lexer::new("<file", "t").collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].tag, Tag::Unknown);
    assert_eq!(tokens[0].range.len(), 5);
}

/// EDGE CASE: `usage` immediately followed by `:` with no space is still
/// recognized (USAGE does not require separation from surrounding text).
#[test]
fn test_edge_usage_without_leading_separation() {
    let tokens: Vec<_> = Lexer::new("xUsage:", "t").collect();
    // leading 'x' makes this one identifier "xUsage", not "Usage" + ':'.
    assert_eq!(tokens[0].tag, Tag::Ident);
}

/// EDGE CASE: `skip_line` used mid-stream does not desynchronize row
/// tracking for the next `next_token` call.
#[test]
fn test_edge_skip_line_then_resume_lexing() {
    let mut lexer = Lexer::new("garbage line\nUsage:\n", "t");
    lexer.skip_line();
    let usage = lexer.next_token();
    assert_eq!(usage.tag, Tag::Usage);
    assert_eq!(usage.range.begin.row, 2);
}

/// EDGE CASE: option name may itself look numeric-ish as long as the first
/// character after the dash is alpha/`_` (identifiers cannot start with a
/// digit), so `-1` is not an option at all.
#[test]
fn test_edge_dash_digit_is_not_an_option() {
    assert_eq!(tags("-1"), vec![Tag::Dash, Tag::Unknown]);
}
