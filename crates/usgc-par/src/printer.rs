//! Pretty-printing a syntax tree back to docopt-style text. Grounded on
//! the reference implementation's `print_syntax`/`print_many`/`print_arg`,
//! which this mirrors production-for-production.

use std::fmt::Write as _;

use crate::ast::Node;

/// Render `root` back into docopt-style help text.
pub fn print_root(root: &Node<'_>) -> String {
    let mut out = String::new();
    print_node(&mut out, root);
    out
}

fn print_node(out: &mut String, node: &Node<'_>) {
    match node {
        Node::Root(d) => {
            write!(out, "{}\n\nUsage:\n", d.info).unwrap();
            print_many(out, "\n", &d.usages);
            out.push_str("\n\nOptions:\n");
            print_many(out, "\n", &d.descs);
            out.push('\n');
        }
        Node::Error(_) => out.push_str("#error#"),
        Node::Usage(d) => {
            write!(out, "  {} ", d.prog).unwrap();
            print_many(out, " ", &d.elems);
        }
        Node::Desc(d) => {
            out.push_str("  ");
            print_many(out, " ", &d.options);
            write!(out, "  {}", d.info).unwrap();
            if let Some(default_val) = &d.default_val {
                write!(out, " # defaults to '{}'", default_val).unwrap();
            }
        }
        Node::Command(d) => out.push_str(d.name),
        Node::Option(d) => {
            out.push_str(if d.is_short { "-" } else { "--" });
            out.push_str(d.name);
            if let Some(arg) = d.arg {
                out.push(if d.is_short { ' ' } else { '=' });
                print_arg(out, arg);
            }
        }
        Node::Arg(d) => print_arg(out, d.name),
        Node::Brackets(d) => {
            out.push('[');
            print_many(out, " ", &d.elems);
            out.push(']');
        }
        Node::Parens(d) => {
            out.push('(');
            print_many(out, " ", &d.elems);
            out.push(')');
        }
        Node::Repeat(d) => {
            print_node(out, d.elem);
            out.push_str("...");
        }
        Node::Stdin(_) => out.push('-'),
        Node::Sep(_) => out.push_str("--"),
        Node::Or(d) => print_many(out, " | ", &d.elems),
    }
}

fn print_many(out: &mut String, sep: &str, elems: &[&Node<'_>]) {
    for (i, elem) in elems.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        print_node(out, elem);
    }
}

/// An all-uppercase argument name prints bare; anything else is wrapped in
/// `<...>`, undoing the delimiter-stripping `parse_arg`/`parse_opt` did.
fn print_arg(out: &mut String, name: &str) {
    if is_all_upper(name) {
        out.push_str(name);
    } else {
        write!(out, "<{}>", name).unwrap();
    }
}

fn is_all_upper(name: &str) -> bool {
    name.bytes().any(|b| b.is_ascii_alphabetic())
        && name.bytes().all(|b| !b.is_ascii_alphabetic() || b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::ParseSession;
    use usgc_util::diagnostic::Handler;

    fn render(text: &str) -> String {
        let session = ParseSession::new();
        let handler = Handler::new();
        let root = crate::parse(&session, text, "t", &handler);
        print_root(root)
    }

    /// Renders `text`, then reparses and re-renders that output. If
    /// `print(parse(s))` and `print(parse(print(parse(s))))` agree, the
    /// second parse built a structurally equal tree (ignoring ranges,
    /// which the printer never looks at) to the first — a printer that
    /// dropped or duplicated anything on the second pass would diverge.
    fn round_trip(text: &str) -> (String, String) {
        let first = render(text);
        let second = render(&first);
        (first, second)
    }

    #[test]
    fn round_trips_a_simple_usage_line() {
        let out = render("A tool.\nUsage:\n  prog FILE\n");
        assert!(out.starts_with("A tool.\n\nUsage:\n  prog FILE"));
    }

    #[test]
    fn option_with_long_arg_uses_equals() {
        let out = render("Usage:\n  prog --output=FILE\n");
        assert!(out.contains("--output=FILE"));
    }

    #[test]
    fn option_with_short_arg_uses_space() {
        let out = render("Usage:\n  prog -o FILE\n");
        assert!(out.contains("-o FILE"));
    }

    #[test]
    fn delimited_arg_prints_with_angle_brackets() {
        let out = render("Usage:\n  prog <file>\n");
        assert!(out.contains("<file>"));
    }

    #[test]
    fn description_default_value_is_rendered_as_a_comment() {
        let out = render("Usage:\n  prog\n\nOptions:\n  -n NUM  Count [default: 10].\n");
        assert!(out.contains("# defaults to '10'"));
    }

    #[test]
    fn default_value_description_round_trips_without_duplicating() {
        let (first, second) = round_trip("Usage:\n  prog\n\nOptions:\n  -n NUM  Count [default: 10].\n");
        assert_eq!(first.matches("# defaults to '10'").count(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn usage_and_description_round_trip_is_stable() {
        let text = "A tool.\nUsage:\n  prog FILE [-a | -b]...\n\nOptions:\n  -o FILE, --output=FILE  Output file [default: out.txt]\n";
        let (first, second) = round_trip(text);
        assert_eq!(first, second);
    }

    #[test]
    fn repeat_elements_keep_their_dots() {
        let out = render("Usage:\n  prog FILE...\n");
        assert!(out.contains("FILE..."));
    }

    #[test]
    fn stdin_and_sep_print_as_dash_and_ddash() {
        let out = render("Usage:\n  prog - --\n");
        assert!(out.contains("prog - --"));
    }
}
