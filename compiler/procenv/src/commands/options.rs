//! Flags shared by the commands that validate.

use std::path::PathBuf;

use procenv_diagnostic::emitter::ColorMode;

use crate::contract::Contract;

/// Configuration for `procenv check`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CheckOptions {
    pub contract: Contract,
    pub color: ColorMode,
    /// Treat advisories as failures.
    pub deny_warnings: bool,
}

/// A command-line argument that could not be understood.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ArgError {
    #[error("unknown option `{0}`")]
    UnknownFlag(String),
    #[error("invalid value for --color: `{0}` (expected auto, always, or never)")]
    InvalidColor(String),
    #[error("`--{0}=` needs a non-empty value")]
    EmptyValue(&'static str),
    #[error("missing file path")]
    NoFiles,
    #[error("unexpected argument `{0}` (only one file is accepted)")]
    ExtraFile(String),
}

/// Split `args` (everything after the command name) into options and files.
///
/// Recognized options:
///
/// - `--scope=<name>`, `--namespace=<name>`, `--interface=<name>`
/// - `--color=auto|always|never`
/// - `--deny-warnings`
pub fn parse_check_args(args: &[String]) -> Result<(CheckOptions, Vec<PathBuf>), ArgError> {
    let mut options = CheckOptions::default();
    let mut files = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--scope=") {
            options.contract.scope = non_empty("scope", value)?;
        } else if let Some(value) = arg.strip_prefix("--namespace=") {
            options.contract.namespace = non_empty("namespace", value)?;
        } else if let Some(value) = arg.strip_prefix("--interface=") {
            options.contract.interface = non_empty("interface", value)?;
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color =
                ColorMode::parse(value).ok_or_else(|| ArgError::InvalidColor(value.to_string()))?;
        } else if arg == "--deny-warnings" {
            options.deny_warnings = true;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(ArgError::UnknownFlag(arg.clone()));
        } else {
            files.push(PathBuf::from(arg));
        }
    }

    if files.is_empty() {
        return Err(ArgError::NoFiles);
    }
    Ok((options, files))
}

fn non_empty(flag: &'static str, value: &str) -> Result<String, ArgError> {
    if value.is_empty() {
        Err(ArgError::EmptyValue(flag))
    } else {
        Ok(value.to_string())
    }
}

/// Arguments of `lex`, `tree`, and `facts`: exactly one file and at most
/// one command-specific switch.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InspectArgs {
    pub path: PathBuf,
    /// Whether the command's switch (`--canonical`, `--json`) was given.
    pub switch: bool,
}

/// Parse inspection arguments. `switch` names the one flag the command
/// accepts; anything else starting with `-` is rejected.
pub fn parse_inspect_args(
    args: &[String],
    switch: Option<&str>,
) -> Result<InspectArgs, ArgError> {
    let mut path = None;
    let mut switched = false;

    for arg in args {
        if switch == Some(arg.as_str()) {
            switched = true;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(ArgError::UnknownFlag(arg.clone()));
        } else if path.is_some() {
            return Err(ArgError::ExtraFile(arg.clone()));
        } else {
            path = Some(PathBuf::from(arg));
        }
    }

    let path = path.ok_or(ArgError::NoFiles)?;
    Ok(InspectArgs {
        path,
        switch: switched,
    })
}
