//! Storage types for aoikv.
//!
//! A table holds documents of the shape `{ key, value }`. The key is the
//! composite key (`key` or `key_id`); the value is an arbitrary JSON value.

use serde::{Deserialize, Serialize};

/// Name of the table the host framework keeps its own variables in.
/// Always registered, whatever the caller declares.
pub const INTERNAL_VARS_TABLE: &str = "__aoijs_vars__";

/// Keys that are read back verbatim and never replaced by a variable default.
pub const RESERVED_KEYS: [&str; 3] = ["cooldown", "setTimeout", "ticketChannel"];

/// Longest table name accepted by [`is_valid_table_name`].
pub const MAX_TABLE_NAME_LEN: usize = 64;

/// A single stored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Composite key the document is stored under.
    pub key: String,
    pub value: serde_json::Value,
}

impl Record {
    pub fn new(key: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Returns true if `key` is one of the [`RESERVED_KEYS`].
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Whether `name` can back a table.
///
/// Non-empty, at most [`MAX_TABLE_NAME_LEN`] bytes, ASCII alphanumerics,
/// `_` and `-` only.
pub fn is_valid_table_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_TABLE_NAME_LEN
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serialize() {
        let record = Record::new("balance_user1", serde_json::json!(100));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"key":"balance_user1","value":100}"#);
    }

    #[test]
    fn test_reserved_keys() {
        assert!(is_reserved_key("cooldown"));
        assert!(is_reserved_key("setTimeout"));
        assert!(is_reserved_key("ticketChannel"));
        assert!(!is_reserved_key("Cooldown"));
        assert!(!is_reserved_key("balance"));
    }

    #[test]
    fn test_valid_table_names() {
        assert!(is_valid_table_name("economy"));
        assert!(is_valid_table_name(INTERNAL_VARS_TABLE));
        assert!(is_valid_table_name("guild-settings2"));
    }

    #[test]
    fn test_invalid_table_names() {
        assert!(!is_valid_table_name(""));
        assert!(!is_valid_table_name("drop table"));
        assert!(!is_valid_table_name("a\"b"));
        assert!(!is_valid_table_name(&"x".repeat(MAX_TABLE_NAME_LEN + 1)));
    }
}
