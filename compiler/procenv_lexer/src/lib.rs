//! Tokenizer for environment declaration files.
//!
//! Converts source text into a flat `Vec<Token>`. Whitespace is dropped;
//! comments and string literals keep their text as payload so later
//! stages can decide what to ignore.
//!
//! # Rules
//!
//! At each position, in priority order:
//!
//! 1. whitespace is skipped
//! 2. `{ } | ? :` are single-character structural tokens
//! 3. a run of `[A-Za-z0-9_]` is a `Word`
//! 4. `//` starts a line comment ending before the next newline
//! 5. `/*` starts a block comment ending after the first `*/`
//! 6. `"`, `'`, or `` ` `` starts a string ending at the next identical quote
//!
//! Any other character produces no token. Escape sequences are not
//! recognized: a backslash before a quote does not keep the string open.
//!
//! Each character belongs to at most one token and the scan never moves
//! backwards. Reaching end of input inside a string, block comment, or
//! line comment is a [`LexError`].

mod cursor;
mod lex_error;

pub use lex_error::{LexError, LexErrorKind};

use cursor::Cursor;
use procenv_ir::{QuoteStyle, Span, Token, TokenKind};
use tracing::trace;

/// Tokenize a whole declaration file.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(source)?.collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Streaming tokenizer.
///
/// Yields `Ok(token)` until the input is exhausted. After the first
/// error it yields nothing further.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer, rejecting sources whose offsets do not fit a [`Span`].
    pub fn new(source: &'a str) -> Result<Self, LexError> {
        if u32::try_from(source.len()).is_err() {
            return Err(LexError::source_too_large(source.len()));
        }
        Ok(Lexer {
            cursor: Cursor::new(source),
            failed: false,
        })
    }

    /// Produce the next token, `Ok(None)` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            let start = self.cursor.pos();
            let Some(c) = self.cursor.current() else {
                return Ok(None);
            };

            if c.is_whitespace() {
                self.cursor.eat_whitespace();
                continue;
            }

            let kind = match c {
                '{' => self.single(TokenKind::Open),
                '}' => self.single(TokenKind::Close),
                '|' => self.single(TokenKind::Pipe),
                '?' => self.single(TokenKind::Optional),
                ':' => self.single(TokenKind::Assign),
                c if is_word_char(c) => self.word(start),
                '/' if self.cursor.peek() == Some('/') => self.line_comment(start)?,
                '/' if self.cursor.peek() == Some('*') => self.block_comment(start)?,
                '"' => self.string(start, QuoteStyle::Double)?,
                '\'' => self.string(start, QuoteStyle::Single)?,
                '`' => self.string(start, QuoteStyle::Backtick)?,
                other => {
                    trace!(offset = start, ch = ?other, "skipping unrecognized character");
                    self.cursor.advance();
                    continue;
                }
            };

            let token = Token::new(kind, self.span_from(start));
            trace!(?token);
            return Ok(Some(token));
        }
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    fn word(&mut self, start: usize) -> TokenKind {
        self.cursor.eat_while(is_word_char);
        TokenKind::Word(self.cursor.slice_from(start).to_string())
    }

    fn line_comment(&mut self, start: usize) -> Result<TokenKind, LexError> {
        self.cursor.advance_ascii(2); // consume '//'
        if !self.cursor.eat_until_byte(b'\n') {
            return Err(LexError::unterminated_line_comment(self.span_from(start)));
        }
        // The newline stays in the input and is skipped as whitespace.
        Ok(TokenKind::Comment(self.cursor.slice_from(start).to_string()))
    }

    fn block_comment(&mut self, start: usize) -> Result<TokenKind, LexError> {
        self.cursor.advance_ascii(2); // consume '/*'
        if !self.cursor.eat_past(b"*/") {
            return Err(LexError::unterminated_block_comment(self.span_from(start)));
        }
        Ok(TokenKind::Comment(self.cursor.slice_from(start).to_string()))
    }

    fn string(&mut self, start: usize, quote: QuoteStyle) -> Result<TokenKind, LexError> {
        self.cursor.advance_ascii(1); // consume opening quote
        let content_start = self.cursor.pos();
        if !self.cursor.eat_until_byte(quote.as_byte()) {
            return Err(LexError::unterminated_string(self.span_from(start), quote));
        }
        let value = self.cursor.slice_from(content_start).to_string();
        self.cursor.advance_ascii(1); // consume closing quote
        Ok(TokenKind::Str { value, quote })
    }

    fn span_from(&self, start: usize) -> Span {
        // `new` guarantees every offset fits in u32.
        Span::try_from_range(start..self.cursor.pos()).unwrap_or(Span::DUMMY)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
