//! Recursive-descent parsing of docopt-style help text into a syntax tree,
//! plus the pretty-printer that renders a tree back to text.

mod arena;
mod ast;
mod parser;
mod printer;

#[cfg(test)]
mod edge_cases;

pub use arena::ParseSession;
pub use ast::{
    ArgData, CommandData, DescData, GroupData, Node, NodeKind, OptionData, OrData, RangeOnly,
    RepeatData, RootData, UsageData,
};
pub use parser::parse;
pub use printer::print_root;
