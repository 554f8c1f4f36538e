//! Splitting a token stream at brace boundaries.

use procenv_ir::{Span, Token, TokenKind};

/// What ended a [`Run`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Boundary {
    /// `{` at the given span.
    Open(Span),
    /// `}` at the given span.
    Close(Span),
    /// End of the token stream.
    End,
}

/// Maximal slice of non-brace tokens plus the boundary that follows it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Run<'a> {
    pub tokens: &'a [Token],
    pub boundary: Boundary,
}

/// Iterator over the runs of a token slice.
///
/// Yields one run per brace plus a final run tagged [`Boundary::End`].
/// Runs may be empty (e.g. between `}` and `}`). Finite; iterate a fresh
/// `Runs` to start over.
pub struct Runs<'a> {
    rest: &'a [Token],
    done: bool,
}

impl<'a> Runs<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Runs {
            rest: tokens,
            done: false,
        }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.rest.iter().position(|t| t.kind.is_brace()) {
            Some(idx) => {
                let brace = &self.rest[idx];
                let boundary = match brace.kind {
                    TokenKind::Open => Boundary::Open(brace.span),
                    _ => Boundary::Close(brace.span),
                };
                let run = Run {
                    tokens: &self.rest[..idx],
                    boundary,
                };
                self.rest = &self.rest[idx + 1..];
                Some(run)
            }
            None => {
                self.done = true;
                Some(Run {
                    tokens: self.rest,
                    boundary: Boundary::End,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests;
