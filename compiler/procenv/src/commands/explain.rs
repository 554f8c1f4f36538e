//! The `explain` command: long-form help for a diagnostic code.

use std::io::Write;

use procenv_diagnostic::ErrorCode;
use tracing::debug;

/// Write the explanation for `code_str` to `out`.
///
/// Returns `false` if the code is unknown, with the list of known codes
/// written to `err`, or if `out` cannot be written.
pub fn explain_error(code_str: &str, out: &mut impl Write, err: &mut impl Write) -> bool {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        let _ = writeln!(err, "Unknown error code: {code_str}");
        let _ = writeln!(err);
        let known: Vec<&str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
        let _ = writeln!(err, "Known codes: {}", known.join(", "));
        return false;
    };

    match writeln!(out, "{code}\n\n{}", code.explanation()) {
        Ok(()) => true,
        Err(error) => {
            debug!(%error, "writing explanation failed");
            false
        }
    }
}
