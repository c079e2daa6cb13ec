use thiserror::Error;

/// Errors from store operations (used by the port traits in aoikv-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("invalid table name: '{0}'")]
    InvalidTableName(String),

    #[error("invalid database url: {0}")]
    InvalidUrl(String),
}

/// Errors surfaced by the table registry to its callers.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The table was never declared in `DatabaseOptions::tables`.
    #[error("Table \"{0}\" is not defined in options. Please provide it!")]
    TableNotDefined(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Errors from loading the adapter configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("failed to parse config {path}: {reason}")]
    Parse { path: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_not_defined_display() {
        let err = DatabaseError::TableNotDefined("undeclared_table".to_string());
        assert_eq!(
            err.to_string(),
            "Table \"undeclared_table\" is not defined in options. Please provide it!"
        );
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_repository_error_is_transparent() {
        let err: DatabaseError = RepositoryError::InvalidTableName("a b".to_string()).into();
        assert_eq!(err.to_string(), "invalid table name: 'a b'");
    }

    #[test]
    fn test_invalid_url_display() {
        let err = RepositoryError::InvalidUrl("unknown query parameter `foo`".to_string());
        assert_eq!(
            err.to_string(),
            "invalid database url: unknown query parameter `foo`"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Parse {
            path: "config.toml".to_string(),
            reason: "expected `=`".to_string(),
        };
        assert!(err.to_string().contains("config.toml"));
        assert!(err.to_string().contains("expected `=`"));
    }
}
