//! Brace-structured scope tree.

use crate::{Span, Token};

/// One node of the scope tree.
///
/// `instructions` are the non-brace tokens that belong directly to this
/// block, in source order. `children` are the `{ ... }` regions opened
/// inside it, also in source order.
///
/// The root of a parsed file is synthetic: its instructions are always
/// empty and each child is one top-level statement group.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Block {
    pub instructions: Vec<Token>,
    pub children: Vec<Block>,
    /// Span of the `{` that opened this block. `None` for the root and
    /// for top-level statement groups, which have no brace of their own.
    pub open: Option<Span>,
}

impl Block {
    pub fn new() -> Self {
        Block::default()
    }

    /// A block opened by the `{` at `span`.
    pub fn braced(span: Span) -> Self {
        Block {
            open: Some(span),
            ..Block::default()
        }
    }

    /// Iterate this block and all descendants in pre-order.
    ///
    /// A block is yielded before its children; children are yielded in
    /// left-to-right order. Each item carries its depth below `self`.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder {
            stack: vec![(0, self)],
        }
    }

    /// Total number of blocks in this subtree, `self` included.
    pub fn block_count(&self) -> usize {
        self.pre_order().count()
    }
}

/// Pre-order walk over a [`Block`] tree using an explicit stack.
///
/// Deep nesting does not grow the call stack.
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a Block)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a Block);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, block) = self.stack.pop()?;
        // Reverse push so the leftmost child is popped first.
        self.stack
            .extend(block.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, block))
    }
}
