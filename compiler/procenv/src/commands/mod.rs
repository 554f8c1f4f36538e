//! Command handlers for the `procenv` CLI.
//!
//! Each submodule implements one command. Handlers take their output
//! streams as arguments and return whether the command succeeded; `main`
//! turns that into the process exit code.

use std::io::Write;
use std::path::Path;

use procenv_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};

use crate::error::CheckError;
use crate::pipeline::read_declaration_file;

mod check;
mod debug;
mod explain;
mod options;

pub use check::{check_files, CheckSummary};
pub use debug::{
    facts_file, lex_file, render_canonical, render_facts, render_tokens, render_tree, tree_file,
};
pub use explain::explain_error;
pub use options::{parse_check_args, parse_inspect_args, ArgError, CheckOptions, InspectArgs};

/// Read `path`, reporting a failure through `emitter`.
///
/// On success the emitter's source is switched to the file so later
/// diagnostics render as `path:line:col`.
fn load<W: Write>(path: &Path, emitter: &mut TerminalEmitter<W>) -> Option<String> {
    match read_declaration_file(path) {
        Ok(source) => {
            emitter.set_source(path.display().to_string(), source.as_str());
            Some(source)
        }
        Err(err) => {
            report(&err, emitter);
            None
        }
    }
}

/// Emit every diagnostic for `err`, returning how many were emitted.
fn report<W: Write>(err: &CheckError, emitter: &mut TerminalEmitter<W>) -> usize {
    let diagnostics = err.diagnostics();
    emitter.emit_all(&diagnostics);
    diagnostics.len()
}
