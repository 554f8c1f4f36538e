//! Token types produced by the lexer.
//!
//! Structural kinds carry no payload; `Word`, `Comment`, and `Str` carry
//! the literal text. Matching on [`TokenKind`] is exhaustive at every
//! consumption site.

use std::fmt;

use crate::Span;

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a token with a dummy span, for tests and synthesized input.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Quote character that opened a string literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum QuoteStyle {
    /// `"..."`
    Double,
    /// `'...'`
    Single,
    /// `` `...` ``
    Backtick,
}

impl QuoteStyle {
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            QuoteStyle::Double => '"',
            QuoteStyle::Single => '\'',
            QuoteStyle::Backtick => '`',
        }
    }

    /// The quote as a single byte, for `memchr` scans.
    #[inline]
    pub const fn as_byte(self) -> u8 {
        match self {
            QuoteStyle::Double => b'"',
            QuoteStyle::Single => b'\'',
            QuoteStyle::Backtick => b'`',
        }
    }
}

/// Token kinds of the declaration grammar.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// `{`
    Open,
    /// `}`
    Close,
    /// `|`
    Pipe,
    /// `?`
    Optional,
    /// `:`
    Assign,
    /// Run of `[A-Za-z0-9_]`.
    Word(String),
    /// `// ...` or `/* ... */`, delimiters included.
    Comment(String),
    /// Quoted literal; payload excludes the quotes.
    Str { value: String, quote: QuoteStyle },
}

impl TokenKind {
    /// Literal payload of a `Word`, `Comment`, or `Str` token.
    pub fn payload(&self) -> Option<&str> {
        match self {
            TokenKind::Word(text) | TokenKind::Comment(text) => Some(text),
            TokenKind::Str { value, .. } => Some(value),
            TokenKind::Open
            | TokenKind::Close
            | TokenKind::Pipe
            | TokenKind::Optional
            | TokenKind::Assign => None,
        }
    }

    /// Name-like payload: the text of a `Word` or `Str` token.
    ///
    /// Member names may be written bare or quoted; both count.
    pub fn name(&self) -> Option<&str> {
        match self {
            TokenKind::Word(text) => Some(text),
            TokenKind::Str { value, .. } => Some(value),
            _ => None,
        }
    }

    /// `true` for `{` and `}`, the boundaries of the scope tree.
    #[inline]
    pub fn is_brace(&self) -> bool {
        matches!(self, TokenKind::Open | TokenKind::Close)
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::Comment(_))
    }

    /// Short uppercase tag used by `Debug` and the `lex` dump.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Open => "OPEN",
            TokenKind::Close => "CLOSE",
            TokenKind::Pipe => "PIPE",
            TokenKind::Optional => "OPTIONAL",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Word(_) => "WORD",
            TokenKind::Comment(_) => "COMMENT",
            TokenKind::Str { .. } => "STRING",
        }
    }

    /// Canonical source text of this token.
    ///
    /// Lexing the result yields the same kind again, provided a line
    /// comment is followed by a newline.
    pub fn to_source(&self) -> String {
        match self {
            TokenKind::Open => "{".to_string(),
            TokenKind::Close => "}".to_string(),
            TokenKind::Pipe => "|".to_string(),
            TokenKind::Optional => "?".to_string(),
            TokenKind::Assign => ":".to_string(),
            TokenKind::Word(text) | TokenKind::Comment(text) => text.clone(),
            TokenKind::Str { value, quote } => {
                let q = quote.as_char();
                format!("{q}{value}{q}")
            }
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload() {
            Some(text) => write!(f, "{}({text:?})", self.display_name()),
            None => f.write_str(self.display_name()),
        }
    }
}
