//! Host framework variables.
//!
//! The table registry only consults variables for fallback values on reads
//! that find nothing stored.

pub mod registry;

/// Source of default values for host framework variables.
pub trait VariableSource: Send + Sync {
    /// Default value of variable `key` in `table`, if one is configured.
    fn default_value(&self, key: &str, table: &str) -> Option<serde_json::Value>;
}
