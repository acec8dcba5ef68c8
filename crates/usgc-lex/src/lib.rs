//! Lexical analysis of docopt-style help text: turns raw bytes into the
//! closed token tag set the parser consumes (spec 3, 4.1).

mod cursor;
mod lexer;
mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{Tag, Token};
