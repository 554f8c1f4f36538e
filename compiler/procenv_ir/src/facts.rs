//! Facts recovered from a declaration file.

use serde::Serialize;

/// Flat record produced by one interpretation run.
///
/// `scope`, `namespace`, and `interface_name` hold the last value seen
/// during the walk. The variable lists keep first-seen order and never
/// contain duplicates.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSet {
    /// Word following `declare` (e.g. `global`).
    pub scope: Option<String>,
    /// Word following `namespace` (e.g. `NodeJS`).
    pub namespace: Option<String>,
    /// Word following `interface` (e.g. `ProcessEnv`).
    pub interface_name: Option<String>,
    pub required_variables: Vec<String>,
    pub optional_variables: Vec<String>,
}

impl FactSet {
    /// Record a required member. Returns `false` if it was already known.
    pub fn add_required(&mut self, name: &str) -> bool {
        push_unique(&mut self.required_variables, name)
    }

    /// Record an optional member. Returns `false` if it was already known.
    pub fn add_optional(&mut self, name: &str) -> bool {
        push_unique(&mut self.optional_variables, name)
    }
}

fn push_unique(list: &mut Vec<String>, name: &str) -> bool {
    if list.iter().any(|existing| existing == name) {
        return false;
    }
    list.push(name.to_string());
    true
}
