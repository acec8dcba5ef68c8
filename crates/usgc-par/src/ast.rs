//! The syntax tree the parser builds: one node kind per production, each
//! carrying its source range. Grounded on the tagged `Syntax` union of the
//! original lexer/parser this crate's grammar was distilled from, reshaped
//! into a Rust sum type with ordinary `Vec`s in place of intrusive sibling
//! pointers.

use usgc_util::span::SourceRange;

/// Discriminant for [`Node`], useful where callers want to match on shape
/// without destructuring (diagnostics, the checker's dispatch table).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Usage,
    Desc,
    Command,
    Option,
    Arg,
    Parens,
    Brackets,
    Repeat,
    Or,
    Stdin,
    Sep,
    Error,
}

#[derive(Debug)]
pub struct RootData<'s> {
    pub range: SourceRange,
    pub info: &'s str,
    pub usages: Vec<&'s Node<'s>>,
    pub descs: Vec<&'s Node<'s>>,
}

#[derive(Debug)]
pub struct UsageData<'s> {
    pub range: SourceRange,
    pub prog: &'s str,
    pub elems: Vec<&'s Node<'s>>,
}

#[derive(Debug)]
pub struct DescData<'s> {
    pub range: SourceRange,
    pub options: Vec<&'s Node<'s>>,
    pub info: String,
    pub default_val: Option<String>,
}

#[derive(Debug)]
pub struct CommandData<'s> {
    pub range: SourceRange,
    pub name: &'s str,
}

#[derive(Debug)]
pub struct OptionData<'s> {
    pub range: SourceRange,
    pub is_short: bool,
    pub name: &'s str,
    pub arg: Option<&'s str>,
}

#[derive(Debug)]
pub struct ArgData<'s> {
    pub range: SourceRange,
    pub name: &'s str,
}

#[derive(Debug)]
pub struct GroupData<'s> {
    pub range: SourceRange,
    pub elems: Vec<&'s Node<'s>>,
}

#[derive(Debug)]
pub struct RepeatData<'s> {
    pub range: SourceRange,
    pub elem: &'s Node<'s>,
}

#[derive(Debug)]
pub struct OrData<'s> {
    pub range: SourceRange,
    pub elems: Vec<&'s Node<'s>>,
}

#[derive(Debug)]
pub struct RangeOnly {
    pub range: SourceRange,
}

/// A node in the syntax tree, arena-allocated for the lifetime of one parse
/// session (see [`crate::arena::ParseSession`]).
#[derive(Debug)]
pub enum Node<'s> {
    Root(RootData<'s>),
    Usage(UsageData<'s>),
    Desc(DescData<'s>),
    Command(CommandData<'s>),
    Option(OptionData<'s>),
    Arg(ArgData<'s>),
    Parens(GroupData<'s>),
    Brackets(GroupData<'s>),
    Repeat(RepeatData<'s>),
    Or(OrData<'s>),
    Stdin(RangeOnly),
    Sep(RangeOnly),
    Error(RangeOnly),
}

impl<'s> Node<'s> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Root(_) => NodeKind::Root,
            Node::Usage(_) => NodeKind::Usage,
            Node::Desc(_) => NodeKind::Desc,
            Node::Command(_) => NodeKind::Command,
            Node::Option(_) => NodeKind::Option,
            Node::Arg(_) => NodeKind::Arg,
            Node::Parens(_) => NodeKind::Parens,
            Node::Brackets(_) => NodeKind::Brackets,
            Node::Repeat(_) => NodeKind::Repeat,
            Node::Or(_) => NodeKind::Or,
            Node::Stdin(_) => NodeKind::Stdin,
            Node::Sep(_) => NodeKind::Sep,
            Node::Error(_) => NodeKind::Error,
        }
    }

    pub fn range(&self) -> &SourceRange {
        match self {
            Node::Root(d) => &d.range,
            Node::Usage(d) => &d.range,
            Node::Desc(d) => &d.range,
            Node::Command(d) => &d.range,
            Node::Option(d) => &d.range,
            Node::Arg(d) => &d.range,
            Node::Parens(d) => &d.range,
            Node::Brackets(d) => &d.range,
            Node::Repeat(d) => &d.range,
            Node::Or(d) => &d.range,
            Node::Stdin(d) => &d.range,
            Node::Sep(d) => &d.range,
            Node::Error(d) => &d.range,
        }
    }

    pub fn as_root(&self) -> Option<&RootData<'s>> {
        match self {
            Node::Root(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_usage(&self) -> Option<&UsageData<'s>> {
        match self {
            Node::Usage(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_desc(&self) -> Option<&DescData<'s>> {
        match self {
            Node::Desc(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_option(&self) -> Option<&OptionData<'s>> {
        match self {
            Node::Option(d) => Some(d),
            _ => None,
        }
    }
}
