//! Scope tree builder.
//!
//! Groups a flat token stream into a tree of [`Block`]s, one per `{ ... }`
//! region. The builder is a pushdown automaton over [`Runs`]: every run's
//! tokens are appended to the block on top of the stack, then `{` pushes
//! a new block and `}` pops one. No recursion is involved, so nesting
//! depth is bounded only by memory.
//!
//! The returned root is synthetic and never holds instructions itself.
//! Each top-level statement (e.g. `declare global { ... }` or
//! `export { }`) becomes one child of the root: a group block whose
//! instructions are the tokens before its first `{`, and whose children
//! are the braced regions that follow.

mod error;
mod runs;

pub use error::{ParseError, ParseErrorKind};
pub use runs::{Boundary, Run, Runs};

use procenv_ir::{Block, Span, Token};
use tracing::trace;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum FrameKind {
    Root,
    /// Top-level statement group, closed implicitly.
    Group,
    /// Region opened by `{`.
    Brace,
}

struct Frame {
    block: Block,
    kind: FrameKind,
}

impl Frame {
    fn new(kind: FrameKind) -> Self {
        Frame {
            block: Block::new(),
            kind,
        }
    }

    fn brace(span: Span) -> Self {
        Frame {
            block: Block::braced(span),
            kind: FrameKind::Brace,
        }
    }
}

/// Stack of open blocks. The root frame is always at the bottom.
struct ScopeStack {
    frames: Vec<Frame>,
}

impl ScopeStack {
    fn new() -> Self {
        ScopeStack {
            frames: vec![Frame::new(FrameKind::Root)],
        }
    }

    fn top_kind(&self) -> FrameKind {
        self.frames.last().map_or(FrameKind::Root, |f| f.kind)
    }

    fn top_mut(&mut self) -> &mut Block {
        let idx = self.frames.len() - 1;
        &mut self.frames[idx].block
    }

    fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Pop the top frame and append its block to the new top's children.
    fn close_top(&mut self) {
        if self.frames.len() < 2 {
            return;
        }
        if let Some(frame) = self.frames.pop() {
            self.top_mut().children.push(frame.block);
        }
    }

    fn open_braces(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter().filter(|f| f.kind == FrameKind::Brace)
    }

    fn into_root(mut self) -> Block {
        while self.frames.len() > 1 {
            self.close_top();
        }
        self.frames.pop().map(|f| f.block).unwrap_or_default()
    }
}

/// Build the scope tree for a token stream.
///
/// Fails with [`ParseErrorKind::UnclosedScope`] if any `{` is still open
/// at end of input, and with [`ParseErrorKind::UnexpectedClose`] on a `}`
/// that has nothing to close.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn build_tree(tokens: &[Token]) -> Result<Block, ParseError> {
    let mut stack = ScopeStack::new();

    for run in Runs::new(tokens) {
        trace!(len = run.tokens.len(), boundary = ?run.boundary, depth = stack.frames.len());

        let starts_group = !run.tokens.is_empty() || matches!(run.boundary, Boundary::Open(_));
        if stack.top_kind() == FrameKind::Root && starts_group {
            stack.push(Frame::new(FrameKind::Group));
        }

        stack.top_mut().instructions.extend_from_slice(run.tokens);

        match run.boundary {
            Boundary::Open(span) => stack.push(Frame::brace(span)),
            Boundary::Close(span) => {
                if stack.top_kind() != FrameKind::Brace {
                    return Err(ParseError::unexpected_close(span));
                }
                stack.close_top();
                if stack.top_kind() == FrameKind::Group && stack.frames.len() == 2 {
                    stack.close_top();
                }
            }
            Boundary::End => {
                let unclosed = stack.open_braces().count();
                if let Some(innermost) = stack.open_braces().last() {
                    let span = innermost.block.open.unwrap_or(Span::DUMMY);
                    return Err(ParseError::unclosed_scope(span, unclosed));
                }
            }
        }
    }

    let root = stack.into_root();
    tracing::debug!(
        groups = root.children.len(),
        blocks = root.block_count(),
        "scope tree built"
    );
    Ok(root)
}

#[cfg(test)]
mod tests;
