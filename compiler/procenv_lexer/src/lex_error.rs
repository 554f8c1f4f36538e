//! Lexer error types.
//!
//! Every variant is a malformed literal: the scanner reached end of input
//! inside a construct that needs a closing delimiter.

use procenv_ir::{QuoteStyle, Span};

/// A lexer error with the span of the unterminated literal.
///
/// The span runs from the literal's opening delimiter to end of input.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What kind of malformed literal was found.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unterminated string literal, expected closing {}", .quote.as_char())]
    UnterminatedString { quote: QuoteStyle },
    #[error("unterminated block comment, expected `*/`")]
    UnterminatedBlockComment,
    #[error("line comment reaches end of input without a newline")]
    UnterminatedLineComment,
    #[error("source is too large ({len} bytes)")]
    SourceTooLarge { len: usize },
}

impl LexError {
    #[cold]
    pub fn unterminated_string(span: Span, quote: QuoteStyle) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedString { quote },
        }
    }

    #[cold]
    pub fn unterminated_block_comment(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedBlockComment,
        }
    }

    #[cold]
    pub fn unterminated_line_comment(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedLineComment,
        }
    }

    #[cold]
    pub fn source_too_large(len: usize) -> Self {
        LexError {
            span: Span::DUMMY,
            kind: LexErrorKind::SourceTooLarge { len },
        }
    }

    /// Hint for how to fix the literal.
    pub fn help(&self) -> Option<String> {
        match &self.kind {
            LexErrorKind::UnterminatedString { quote } => Some(format!(
                "add a closing {} (escaped quotes are not supported)",
                quote.as_char()
            )),
            LexErrorKind::UnterminatedBlockComment => Some("add `*/` to close the comment".into()),
            LexErrorKind::UnterminatedLineComment => {
                Some("end the file with a newline".into())
            }
            LexErrorKind::SourceTooLarge { .. } => None,
        }
    }
}
