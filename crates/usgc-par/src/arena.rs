//! The arena a parse session allocates its syntax tree in.
//!
//! One [`ParseSession`] owns exactly one `bumpalo::Bump`. Nodes handed back
//! by [`crate::parse`] borrow from it, so the tree and the session that
//! produced it live and die together: create the session, parse, consume
//! the tree, then drop the session.

use bumpalo::Bump;

use crate::ast::Node;

pub struct ParseSession {
    bump: Bump,
}

impl ParseSession {
    pub fn new() -> Self {
        ParseSession { bump: Bump::new() }
    }

    /// Allocate a node in this session's arena, returning a reference tied
    /// to the session's lifetime. Sibling lists stay ordinary `Vec`s of
    /// these references: only the nodes themselves live in the bump arena.
    pub fn alloc<'s>(&'s self, node: Node<'s>) -> &'s Node<'s> {
        self.bump.alloc(node)
    }
}

impl Default for ParseSession {
    fn default() -> Self {
        Self::new()
    }
}
