//! Error codes for all procenv diagnostics.

use std::fmt;

/// Error codes for all procenv diagnostics.
///
/// The leading digit names the stage that produced the diagnostic; a `W`
/// prefix marks codes that are only ever emitted as warnings.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer (E0xxx)
    /// Unterminated string, block comment, or trailing line comment
    E0001,

    // Scope tree (E1xxx)
    /// `{` never closed
    E1001,
    /// `}` without a matching `{`
    E1002,

    // Schema (E2xxx)
    /// Scope, namespace, or interface does not match the expected contract
    E2001,

    // Environment (E3xxx)
    /// Required variable missing or empty
    E3001,
    /// Optional variable missing or empty (advisory)
    W3001,

    // I/O (E9xxx)
    /// Declaration file could not be read
    E9001,
}

impl ErrorCode {
    /// All codes, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E2001,
        ErrorCode::E3001,
        ErrorCode::W3001,
        ErrorCode::E9001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E3001 => "E3001",
            ErrorCode::W3001 => "W3001",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Long-form explanation shown by `procenv explain`.
    pub fn explanation(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "A string literal, block comment, or line comment reached the end \
                 of the file before it was closed.\n\n\
                 Strings end at the next occurrence of their own quote character; \
                 escaped quotes are not supported. Block comments end at the first \
                 `*/`. A line comment must be followed by a newline."
            }
            ErrorCode::E1001 => {
                "A `{` was opened and never closed. Every scope in a declaration \
                 file must be balanced."
            }
            ErrorCode::E1002 => "A `}` appeared with no open scope to close.",
            ErrorCode::E2001 => {
                "The file does not describe the expected contract. It must have \
                 the shape:\n\n\
                 declare global {\n  namespace NodeJS {\n    interface ProcessEnv {\n      NAME: string\n    }\n  }\n}\n\n\
                 The expected scope, namespace, and interface can be changed with \
                 --scope=, --namespace=, and --interface=."
            }
            ErrorCode::E3001 => {
                "A variable declared without `?` has no value in the environment. \
                 Empty values count as missing."
            }
            ErrorCode::W3001 => {
                "A variable declared with `?` has no value in the environment. \
                 This is reported but does not fail the check unless \
                 --deny-warnings is given."
            }
            ErrorCode::E9001 => "The declaration file could not be read.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an error code string like `"E2001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
