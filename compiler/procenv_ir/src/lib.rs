//! Intermediate representation shared by every procenv stage.
//!
//! The pipeline is `text -> Vec<Token> -> Block -> FactSet`. This crate
//! holds the data types passed between stages and nothing else:
//!
//! - [`Span`]: byte range into the declaration source
//! - [`Token`] / [`TokenKind`]: lexer output
//! - [`Block`]: one node of the brace-structured scope tree
//! - [`FactSet`]: interpreter output consumed by the validator

mod block;
mod facts;
mod span;
mod token;

pub use block::{Block, PreOrder};
pub use facts::FactSet;
pub use span::{Span, SpanError};
pub use token::{QuoteStyle, Token, TokenKind};
