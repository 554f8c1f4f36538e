//! Scope tree errors.

use procenv_ir::Span;

/// An unbalanced brace, with the span of the offending brace.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub span: Span,
    pub kind: ParseErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    /// End of input with scopes still open. `span` is the innermost `{`.
    #[error("unclosed scope: {unclosed} `{{` never closed")]
    UnclosedScope { unclosed: usize },
    /// `}` with no open scope.
    #[error("unexpected `}}` with no open scope")]
    UnexpectedClose,
}

impl ParseError {
    #[cold]
    pub fn unclosed_scope(span: Span, unclosed: usize) -> Self {
        ParseError {
            span,
            kind: ParseErrorKind::UnclosedScope { unclosed },
        }
    }

    #[cold]
    pub fn unexpected_close(span: Span) -> Self {
        ParseError {
            span,
            kind: ParseErrorKind::UnexpectedClose,
        }
    }
}
