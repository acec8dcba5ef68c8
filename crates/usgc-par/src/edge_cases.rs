//! Boundary-behavior and end-to-end scenario tests for the parser.

use usgc_util::diagnostic::Handler;

use crate::arena::ParseSession;
use crate::ast::NodeKind;

fn parse_ok<'s>(session: &'s ParseSession, handler: &'s Handler, text: &'s str) -> &'s crate::Node<'s> {
    crate::parse(session, text, "t", handler)
}

/// EDGE CASE: input of only whitespace/newlines has no usage keyword, so
/// the root is an Error node rather than an empty Root — locating a usage
/// section is mandatory, not optional.
#[test]
fn test_edge_blank_input_fails_to_locate_usage() {
    let session = ParseSession::new();
    let handler = Handler::new();
    let root = parse_ok(&session, &handler, "   \n\n  \n");
    assert_eq!(root.kind(), NodeKind::Error);
    assert!(handler.has_errors());
}

/// EDGE CASE: `[default:]` with an empty body yields an empty default
/// value and no diagnostic (the bracket closes immediately).
#[test]
fn test_edge_empty_default_value_is_not_an_error() {
    let session = ParseSession::new();
    let handler = Handler::new();
    let text = "Usage:\n  prog\n\nOptions:\n  -n NUM  Count [default:].\n";
    let root = parse_ok(&session, &handler, text).as_root().unwrap();
    let desc = root.descs[0].as_desc().unwrap();
    assert_eq!(desc.default_val.as_deref(), Some(""));
    assert!(!handler.has_errors());
}

/// EDGE CASE: a long option's `=`-spliced argument, stripped of its `<>`
/// delimiters, round-trips through the tree exactly as scenario S1 wants.
#[test]
fn test_edge_long_option_with_delimited_argument() {
    let session = ParseSession::new();
    let handler = Handler::new();
    let text = "Usage:\n  prog --foo=<x>\n";
    let root = parse_ok(&session, &handler, text).as_root().unwrap();
    assert_eq!(root.info, "");
    assert!(!handler.has_errors());
    let usage = root.usages[0].as_usage().unwrap();
    let opt = usage.elems[0].as_option().unwrap();
    assert!(!opt.is_short);
    assert_eq!(opt.name, "foo");
    assert_eq!(opt.arg, Some("x"));
}

/// EDGE CASE: `[-a | -b]...` nests Repeat(Brackets(Or(Option, Option))) —
/// every grouping layer must survive in order.
#[test]
fn test_edge_repeated_bracketed_alternation() {
    let session = ParseSession::new();
    let handler = Handler::new();
    let text = "Usage:\n  prog [-a | -b]...\n";
    let root = parse_ok(&session, &handler, text).as_root().unwrap();
    let usage = root.usages[0].as_usage().unwrap();
    assert_eq!(usage.elems[0].kind(), NodeKind::Repeat);
    let repeat = match usage.elems[0] {
        crate::Node::Repeat(d) => d,
        _ => unreachable!(),
    };
    assert_eq!(repeat.elem.kind(), NodeKind::Brackets);
    let brackets = match repeat.elem {
        crate::Node::Brackets(d) => d,
        _ => unreachable!(),
    };
    assert_eq!(brackets.elems[0].kind(), NodeKind::Or);
    let or_node = match brackets.elems[0] {
        crate::Node::Or(d) => d,
        _ => unreachable!(),
    };
    assert_eq!(or_node.elems.len(), 2);
    assert_eq!(or_node.elems[0].as_option().unwrap().name, "a");
    assert_eq!(or_node.elems[1].as_option().unwrap().name, "b");
}

/// EDGE CASE: a description whose options share one argument name (`-o
/// FILE, --output=FILE`) produces a single Desc with both options and the
/// `[default: ...]` value pulled out of the free-text tail.
#[test]
fn test_edge_option_group_with_shared_argument_and_default() {
    let session = ParseSession::new();
    let handler = Handler::new();
    let text = "Usage:\n  prog FILE\n\nOptions:\n  -o FILE, --output=FILE  Output file [default: out.txt]\n";
    let root = parse_ok(&session, &handler, text).as_root().unwrap();
    let desc = root.descs[0].as_desc().unwrap();
    assert_eq!(desc.options.len(), 2);
    assert_eq!(desc.options[0].as_option().unwrap().arg, Some("FILE"));
    assert_eq!(desc.options[1].as_option().unwrap().arg, Some("FILE"));
    assert!(desc.info.starts_with("Output file"));
    assert_eq!(desc.default_val.as_deref(), Some("out.txt"));
}

/// EDGE CASE: an unterminated `Usage:\n  prog (-` never loops — parsing
/// always terminates at end-of-file, still returns a Root, and the
/// unterminated Parens itself holds an Error node marking the missing
/// close.
#[test]
fn test_edge_unterminated_parens_still_returns_a_root() {
    let session = ParseSession::new();
    let handler = Handler::new();
    let root = parse_ok(&session, &handler, "Usage:\n  prog (-\n").as_root().unwrap();
    assert!(handler.has_errors());
    let usage = root.usages[0].as_usage().unwrap();
    let parens = match usage.elems[0] {
        crate::Node::Parens(d) => d,
        _ => panic!("expected parens"),
    };
    assert_eq!(parens.elems[0].kind(), NodeKind::Stdin);
    assert!(parens.elems.iter().any(|e| e.kind() == NodeKind::Error));
}

/// EDGE CASE: multiple usage lines under one `Usage:` header are all
/// collected, stopping as soon as a non-identifier line is seen.
#[test]
fn test_edge_multiple_usage_lines_collected_until_blank() {
    let session = ParseSession::new();
    let handler = Handler::new();
    let text = "Usage:\n  prog FILE\n  prog --help\n";
    let root = parse_ok(&session, &handler, text).as_root().unwrap();
    assert_eq!(root.usages.len(), 2);
}
