//! Text to validation result, one stage after another.

use std::path::Path;

use procenv_ir::FactSet;
use tracing::debug;

use crate::contract::Contract;
use crate::env::{EnvSnapshot, EnvSource};
use crate::error::CheckError;
use crate::validate::{validate, Validation};

/// Run the front end (tokenize, build the scope tree, interpret).
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn extract_facts(source: &str) -> Result<FactSet, CheckError> {
    let tokens = procenv_lexer::tokenize(source)?;
    let tree = procenv_parse::build_tree(&tokens)?;
    let facts = procenv_interp::interpret(&tree);
    debug!(
        tokens = tokens.len(),
        blocks = tree.block_count(),
        required = facts.required_variables.len(),
        optional = facts.optional_variables.len(),
        "front end done"
    );
    Ok(facts)
}

/// Extract facts from `source` and validate them.
pub fn check_source(
    source: &str,
    env: &impl EnvSource,
    contract: &Contract,
) -> Result<Validation, CheckError> {
    let facts = extract_facts(source)?;
    Ok(validate(&facts, env, contract)?)
}

/// Read a declaration file from disk.
pub fn read_declaration_file(path: &Path) -> Result<String, CheckError> {
    std::fs::read_to_string(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Check `path` against the current process environment and the
/// `global` / `NodeJS` / `ProcessEnv` contract.
///
/// Absent optional variables are returned as advisories and logged at
/// `warn`; any other problem is an error.
pub fn check_declaration_file(path: impl AsRef<Path>) -> Result<Validation, CheckError> {
    check_declaration_file_with(path, &EnvSnapshot::from_process(), &Contract::default())
}

/// [`check_declaration_file`] with an explicit environment and contract.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn check_declaration_file_with(
    path: impl AsRef<Path>,
    env: &impl EnvSource,
    contract: &Contract,
) -> Result<Validation, CheckError> {
    let source = read_declaration_file(path.as_ref())?;
    check_source(&source, env, contract)
}
