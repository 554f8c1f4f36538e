//! Environment validation.
//!
//! Checks a [`FactSet`] against a [`Contract`] and then against an
//! environment. The schema is checked first; a file that does not describe
//! the expected interface is never compared against the environment.

use std::fmt;

use procenv_ir::FactSet;
use tracing::{debug, warn};

use crate::contract::{Contract, SchemaField};
use crate::env::EnvSource;

/// A fatal validation failure.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The file does not describe the expected contract.
    #[error("schema mismatch: expected {field} `{expected}`, found {}", describe_found(.found))]
    SchemaMismatch {
        field: SchemaField,
        expected: String,
        found: Option<String>,
    },
    /// Required variables with no value, in declaration order.
    #[error(
        "missing required environment variable{}: {}",
        plural(.names.len()),
        .names.join(", ")
    )]
    MissingRequiredVariable { names: Vec<String> },
}

fn describe_found(found: &Option<String>) -> String {
    match found {
        Some(value) => format!("`{value}`"),
        None => "nothing".to_string(),
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// An optional variable with no value. Never fatal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Advisory {
    pub name: String,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "optional environment variable `{}` is not set", self.name)
    }
}

/// Outcome of a successful validation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Validation {
    /// One entry per absent optional variable, in declaration order.
    pub advisories: Vec<Advisory>,
}

/// Validate `facts` against `contract` and `env`.
///
/// Every absent or empty required variable is collected into a single
/// [`ValidationError::MissingRequiredVariable`]. Absent or empty optional
/// variables become [`Advisory`] entries and are logged at `warn`.
#[tracing::instrument(level = "debug", skip_all, fields(
    required = facts.required_variables.len(),
    optional = facts.optional_variables.len(),
))]
pub fn validate(
    facts: &FactSet,
    env: &impl EnvSource,
    contract: &Contract,
) -> Result<Validation, ValidationError> {
    if let Some(field) = contract.first_mismatch(facts) {
        return Err(ValidationError::SchemaMismatch {
            field,
            expected: contract.expected(field).to_string(),
            found: field.found(facts).map(str::to_string),
        });
    }

    let missing: Vec<String> = facts
        .required_variables
        .iter()
        .filter(|name| !env.has_value(name))
        .cloned()
        .collect();
    if !missing.is_empty() {
        debug!(missing = missing.len(), "required variables absent");
        return Err(ValidationError::MissingRequiredVariable { names: missing });
    }

    let advisories: Vec<Advisory> = facts
        .optional_variables
        .iter()
        .filter(|name| !env.has_value(name))
        .map(|name| Advisory { name: name.clone() })
        .collect();
    for advisory in &advisories {
        warn!(name = %advisory.name, "optional environment variable is not set");
    }

    Ok(Validation { advisories })
}
