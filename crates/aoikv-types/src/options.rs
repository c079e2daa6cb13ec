//! Construction options for the table registry.

use serde::{Deserialize, Serialize};

use crate::storage::INTERNAL_VARS_TABLE;

/// Options handed to `Database::attach`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseOptions {
    /// Connection URL of the backing store.
    pub url: String,

    /// Tables to declare. Absent means only the internal variables table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables: Option<TableSpec>,
}

impl DatabaseOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            tables: None,
        }
    }

    pub fn with_tables(mut self, tables: impl Into<TableSpec>) -> Self {
        self.tables = Some(tables.into());
        self
    }

    /// The declared table list, normalized.
    pub fn declared_tables(&self) -> Vec<String> {
        TableSpec::normalize(self.tables.as_ref())
    }
}

/// A single table name or a list of (possibly null) names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableSpec {
    Single(String),
    List(Vec<Option<String>>),
}

impl TableSpec {
    /// Flatten a table spec into the declared table list.
    ///
    /// Order is preserved, null entries and duplicates are dropped, and
    /// [`INTERNAL_VARS_TABLE`] is appended when missing.
    pub fn normalize(spec: Option<&TableSpec>) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        let mut push = |name: &str| {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        };

        match spec {
            None => {}
            Some(TableSpec::Single(name)) => push(name),
            Some(TableSpec::List(entries)) => {
                for name in entries.iter().flatten() {
                    push(name);
                }
            }
        }
        push(INTERNAL_VARS_TABLE);

        names
    }
}

impl From<&str> for TableSpec {
    fn from(name: &str) -> Self {
        TableSpec::Single(name.to_string())
    }
}

impl From<String> for TableSpec {
    fn from(name: String) -> Self {
        TableSpec::Single(name)
    }
}

impl From<Vec<String>> for TableSpec {
    fn from(names: Vec<String>) -> Self {
        TableSpec::List(names.into_iter().map(Some).collect())
    }
}

impl From<Vec<&str>> for TableSpec {
    fn from(names: Vec<&str>) -> Self {
        TableSpec::List(names.into_iter().map(|n| Some(n.to_string())).collect())
    }
}

impl From<Vec<Option<String>>> for TableSpec {
    fn from(names: Vec<Option<String>>) -> Self {
        TableSpec::List(names)
    }
}
