//! In-process variable registry.
//!
//! A (table, name)-indexed registry of variable definitions.

use std::collections::HashMap;

use aoikv_types::config::Variable;

use super::VariableSource;

/// Registry of host framework variables, indexed by table and name.
#[derive(Debug, Default)]
pub struct VariableRegistry {
    variables: HashMap<(String, String), Variable>,
}

impl VariableRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a variable.
    ///
    /// If a variable with the same table and name exists, it is replaced.
    pub fn register(&mut self, variable: Variable) {
        self.variables.insert(
            (variable.table.clone(), variable.name.clone()),
            variable,
        );
    }

    /// Look up a variable by name and table.
    pub fn get(&self, name: &str, table: &str) -> Option<&Variable> {
        self.variables.get(&(table.to_string(), name.to_string()))
    }
}

impl FromIterator<Variable> for VariableRegistry {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        let mut registry = Self::new();
        for variable in iter {
            registry.register(variable);
        }
        registry
    }
}

impl VariableSource for VariableRegistry {
    fn default_value(&self, key: &str, table: &str) -> Option<serde_json::Value> {
        self.get(key, table).and_then(|v| v.default.clone())
    }
}
