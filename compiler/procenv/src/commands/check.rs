//! The `check` command: validate the environment against declaration files.

use std::io::Write;
use std::path::PathBuf;

use procenv_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use tracing::debug;

use super::{load, report, CheckOptions};
use crate::env::EnvSource;
use crate::error::CheckError;
use crate::pipeline::extract_facts;
use crate::validate::validate;

/// Totals across every file of one `check` run.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CheckSummary {
    pub files: usize,
    pub passed: usize,
    pub errors: usize,
    pub warnings: usize,
    /// `OK:` lines that could not be written to the output stream.
    pub write_failures: usize,
}

impl CheckSummary {
    pub fn is_success(&self, deny_warnings: bool) -> bool {
        self.errors == 0 && self.write_failures == 0 && !(deny_warnings && self.warnings > 0)
    }
}

/// Check each file in turn against `env`.
///
/// Files are independent: a failure in one does not stop the others, and
/// every problem is reported before returning. Passing files print
/// `OK: <path> (<n> required, <m> optional)` to `out`; a failed write
/// there makes the run unsuccessful.
pub fn check_files<W: Write>(
    paths: &[PathBuf],
    env: &impl EnvSource,
    options: &CheckOptions,
    emitter: &mut TerminalEmitter<W>,
    out: &mut impl Write,
) -> CheckSummary {
    let mut summary = CheckSummary {
        files: paths.len(),
        ..CheckSummary::default()
    };

    for path in paths {
        let Some(source) = load(path, emitter) else {
            summary.errors += 1;
            continue;
        };

        let checked = extract_facts(&source).and_then(|facts| {
            let validation = validate(&facts, env, &options.contract).map_err(CheckError::from)?;
            Ok((facts, validation))
        });

        match checked {
            Ok((facts, validation)) => {
                for advisory in &validation.advisories {
                    emitter.emit(&advisory.to_diagnostic());
                }
                summary.warnings += validation.advisories.len();
                summary.passed += 1;
                if let Err(err) = writeln!(
                    out,
                    "OK: {} ({} required, {} optional)",
                    path.display(),
                    facts.required_variables.len(),
                    facts.optional_variables.len(),
                ) {
                    debug!(path = %path.display(), error = %err, "writing check result failed");
                    summary.write_failures += 1;
                }
            }
            Err(err) => {
                debug!(path = %path.display(), code = %err.code(), "check failed");
                summary.errors += report(&err, emitter);
            }
        }
    }

    if summary.errors > 0 || summary.warnings > 0 {
        emitter.emit_summary(summary.errors, summary.warnings);
    }
    emitter.flush();
    summary
}
