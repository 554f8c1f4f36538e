use std::io;

use pretty_assertions::assert_eq;
use procenv_diagnostic::{ErrorCode, Severity};
use procenv_ir::{QuoteStyle, Span};
use procenv_lexer::LexError;
use procenv_parse::ParseError;

use super::CheckError;
use crate::contract::SchemaField;
use crate::validate::{Advisory, ValidationError};

#[test]
fn codes_per_variant() {
    let io = CheckError::Io {
        path: "env.d.ts".into(),
        source: io::Error::from(io::ErrorKind::NotFound),
    };
    assert_eq!(io.code(), ErrorCode::E9001);

    let lex = CheckError::from(LexError::unterminated_block_comment(Span::new(0, 4)));
    assert_eq!(lex.code(), ErrorCode::E0001);

    let unclosed = CheckError::from(ParseError::unclosed_scope(Span::new(3, 4), 1));
    assert_eq!(unclosed.code(), ErrorCode::E1001);

    let close = CheckError::from(ParseError::unexpected_close(Span::new(0, 1)));
    assert_eq!(close.code(), ErrorCode::E1002);

    let schema = CheckError::from(ValidationError::SchemaMismatch {
        field: SchemaField::Scope,
        expected: "global".into(),
        found: None,
    });
    assert_eq!(schema.code(), ErrorCode::E2001);

    let missing = CheckError::from(ValidationError::MissingRequiredVariable {
        names: vec!["TZ".into()],
    });
    assert_eq!(missing.code(), ErrorCode::E3001);
}

#[test]
fn io_message_names_path() {
    let err = CheckError::Io {
        path: "missing.d.ts".into(),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };
    assert_eq!(err.to_string(), "could not read `missing.d.ts`: no such file");
    let diags = err.diagnostics();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].labels.first().map(|label| label.span), None);
}

#[test]
fn lex_diagnostic_points_at_literal() {
    let err = CheckError::from(LexError::unterminated_string(
        Span::new(5, 9),
        QuoteStyle::Single,
    ));
    let diags = err.diagnostics();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E0001);
    assert_eq!(diags[0].labels.first().map(|label| label.span), Some(Span::new(5, 9)));
    assert_eq!(diags[0].notes.len(), 1);
}

#[test]
fn oversized_source_has_no_label() {
    let err = CheckError::from(LexError::source_too_large(usize::MAX));
    assert_eq!(err.diagnostics()[0].labels.first().map(|label| label.span), None);
}

#[test]
fn unclosed_scope_note_counts_braces() {
    let err = CheckError::from(ParseError::unclosed_scope(Span::new(10, 11), 2));
    let diags = err.diagnostics();
    assert_eq!(diags[0].labels.first().map(|label| label.span), Some(Span::new(10, 11)));
    assert_eq!(diags[0].notes, vec!["add 2 `}` to close the open scopes".to_string()]);
}

#[test]
fn one_diagnostic_per_missing_variable() {
    let err = CheckError::from(ValidationError::MissingRequiredVariable {
        names: vec!["TZ".into(), "DB_HOST".into()],
    });
    let messages: Vec<String> = err.diagnostics().into_iter().map(|d| d.message).collect();
    assert_eq!(
        messages,
        vec![
            "required environment variable `TZ` is not set".to_string(),
            "required environment variable `DB_HOST` is not set".to_string(),
        ]
    );
}

#[test]
fn schema_note_names_keyword() {
    let err = CheckError::from(ValidationError::SchemaMismatch {
        field: SchemaField::Interface,
        expected: "ProcessEnv".into(),
        found: Some("Env".into()),
    });
    let diags = err.diagnostics();
    assert_eq!(
        diags[0].notes,
        vec!["the file must contain `interface ...` naming the expected interface".to_string()]
    );
}

#[test]
fn advisory_is_warning() {
    let diag = Advisory {
        name: "DEV_PORT".into(),
    }
    .to_diagnostic();
    assert_eq!(diag.code, ErrorCode::W3001);
    assert_eq!(diag.severity, Severity::Warning);
}
