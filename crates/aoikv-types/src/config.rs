//! Adapter configuration types.
//!
//! `AdapterConfig` mirrors the `config.toml` an embedding application ships:
//! a `[database]` section and any number of `[[variables]]` defaults.

use serde::{Deserialize, Serialize};

use crate::options::{DatabaseOptions, TableSpec};
use crate::storage::INTERNAL_VARS_TABLE;

/// Top-level adapter configuration. All fields have defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdapterConfig {
    #[serde(default)]
    pub database: DatabaseSection,

    /// Host framework variables and their default values.
    #[serde(default)]
    pub variables: Vec<Variable>,
}

/// The `[database]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseSection {
    /// Store URL. When absent the platform default is used.
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub tables: Option<TableSpec>,
}

impl AdapterConfig {
    /// Build registry options, using `fallback_url` when no URL is configured.
    pub fn database_options(&self, fallback_url: &str) -> DatabaseOptions {
        DatabaseOptions {
            url: self
                .database
                .url
                .clone()
                .unwrap_or_else(|| fallback_url.to_string()),
            tables: self.database.tables.clone(),
        }
    }
}

/// A host framework variable definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,

    /// Table the variable belongs to.
    #[serde(default = "default_variable_table")]
    pub table: String,

    /// Value returned on reads that find no stored record.
    #[serde(default)]
    pub default: Option<serde_json::Value>,
}

impl Variable {
    pub fn new(
        name: impl Into<String>,
        table: impl Into<String>,
        default: Option<serde_json::Value>,
    ) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            default,
        }
    }
}

fn default_variable_table() -> String {
    INTERNAL_VARS_TABLE.to_string()
}
