//! Diagnostic system for declaration-file errors and advisories.
//!
//! Every failure in the pipeline (lexing, tree building, schema checks,
//! environment validation) is converted into a [`Diagnostic`] with a
//! stable [`ErrorCode`] before it reaches the terminal. Codes are grouped
//! by stage:
//!
//! - `E0xxx`: lexer
//! - `E1xxx`: scope tree
//! - `E2xxx`: schema
//! - `E3xxx` / `W3xxx`: environment validation
//! - `E9xxx`: I/O and internal

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
