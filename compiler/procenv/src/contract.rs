//! The declaration shape a file must have to be accepted.

use std::fmt;

use procenv_ir::FactSet;

/// Expected `declare` scope, namespace, and interface name.
///
/// The default describes the Node.js augmentation:
///
/// ```text
/// declare global { namespace NodeJS { interface ProcessEnv { ... } } }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contract {
    pub scope: String,
    pub namespace: String,
    pub interface: String,
}

impl Default for Contract {
    fn default() -> Self {
        Contract {
            scope: "global".to_string(),
            namespace: "NodeJS".to_string(),
            interface: "ProcessEnv".to_string(),
        }
    }
}

/// One of the three slots a [`Contract`] constrains.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SchemaField {
    Scope,
    Namespace,
    Interface,
}

impl SchemaField {
    /// Fields in the order they are checked.
    pub const ALL: [SchemaField; 3] = [
        SchemaField::Scope,
        SchemaField::Namespace,
        SchemaField::Interface,
    ];

    /// Keyword that introduces the field in a declaration file.
    pub fn keyword(self) -> &'static str {
        match self {
            SchemaField::Scope => "declare",
            SchemaField::Namespace => "namespace",
            SchemaField::Interface => "interface",
        }
    }

    /// Value of this field recovered from a file.
    pub fn found(self, facts: &FactSet) -> Option<&str> {
        match self {
            SchemaField::Scope => facts.scope.as_deref(),
            SchemaField::Namespace => facts.namespace.as_deref(),
            SchemaField::Interface => facts.interface_name.as_deref(),
        }
    }
}

impl fmt::Display for SchemaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SchemaField::Scope => "scope",
            SchemaField::Namespace => "namespace",
            SchemaField::Interface => "interface",
        })
    }
}

impl Contract {
    /// Value this contract expects for `field`.
    pub fn expected(&self, field: SchemaField) -> &str {
        match field {
            SchemaField::Scope => &self.scope,
            SchemaField::Namespace => &self.namespace,
            SchemaField::Interface => &self.interface,
        }
    }

    /// First field whose recovered value differs from the expected one.
    pub fn first_mismatch(&self, facts: &FactSet) -> Option<SchemaField> {
        SchemaField::ALL
            .into_iter()
            .find(|&field| field.found(facts) != Some(self.expected(field)))
    }
}
