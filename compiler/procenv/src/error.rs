//! Unified error type for a declaration file check.

use std::io;
use std::path::PathBuf;

use procenv_diagnostic::{Diagnostic, ErrorCode};
use procenv_lexer::{LexError, LexErrorKind};
use procenv_parse::{ParseError, ParseErrorKind};

use crate::validate::{Advisory, ValidationError};

/// Any fatal failure while checking one declaration file.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("could not read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CheckError {
    /// Stable code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            CheckError::Io { .. } => ErrorCode::E9001,
            CheckError::Lex(_) => ErrorCode::E0001,
            CheckError::Parse(err) => match err.kind {
                ParseErrorKind::UnclosedScope { .. } => ErrorCode::E1001,
                ParseErrorKind::UnexpectedClose => ErrorCode::E1002,
            },
            CheckError::Validation(ValidationError::SchemaMismatch { .. }) => ErrorCode::E2001,
            CheckError::Validation(ValidationError::MissingRequiredVariable { .. }) => {
                ErrorCode::E3001
            }
        }
    }

    /// Render as diagnostics.
    ///
    /// A missing-variable failure yields one diagnostic per variable so each
    /// name gets its own line in the report; everything else yields one.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            CheckError::Io { .. } => {
                vec![Diagnostic::error(ErrorCode::E9001).with_message(self.to_string())]
            }
            CheckError::Lex(err) => vec![lex_diagnostic(err)],
            CheckError::Parse(err) => vec![parse_diagnostic(err)],
            CheckError::Validation(ValidationError::SchemaMismatch { field, .. }) => {
                vec![Diagnostic::error(ErrorCode::E2001)
                    .with_message(self.to_string())
                    .with_note(format!(
                        "the file must contain `{} ...` naming the expected {field}",
                        field.keyword()
                    ))]
            }
            CheckError::Validation(ValidationError::MissingRequiredVariable { names }) => names
                .iter()
                .map(|name| {
                    Diagnostic::error(ErrorCode::E3001)
                        .with_message(format!("required environment variable `{name}` is not set"))
                        .with_note("empty values count as unset")
                })
                .collect(),
        }
    }
}

fn lex_diagnostic(err: &LexError) -> Diagnostic {
    let mut diag = Diagnostic::error(ErrorCode::E0001).with_message(err.to_string());
    if !matches!(err.kind, LexErrorKind::SourceTooLarge { .. }) {
        diag = diag.with_label(err.span, "literal starts here");
    }
    if let Some(help) = err.help() {
        diag = diag.with_note(help);
    }
    diag
}

fn parse_diagnostic(err: &ParseError) -> Diagnostic {
    match err.kind {
        ParseErrorKind::UnclosedScope { unclosed } => Diagnostic::error(ErrorCode::E1001)
            .with_message(err.to_string())
            .with_label(err.span, "innermost unclosed `{`")
            .with_note(if unclosed == 1 {
                "add a `}` to close this scope".to_string()
            } else {
                format!("add {unclosed} `}}` to close the open scopes")
            }),
        ParseErrorKind::UnexpectedClose => Diagnostic::error(ErrorCode::E1002)
            .with_message(err.to_string())
            .with_label(err.span, "no matching `{`"),
    }
}

impl Advisory {
    /// Render as a `W3001` warning.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::warning(ErrorCode::W3001).with_message(self.to_string())
    }
}

#[cfg(test)]
mod tests;
