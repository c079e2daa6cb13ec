//! SQLite document store.
//!
//! Implements `DocumentStore` from `aoikv-core`: hands out one
//! [`SqliteCollection`] per valid table name, all sharing one pool.

use aoikv_core::storage::collection::DocumentStore;
use aoikv_types::error::RepositoryError;
use aoikv_types::storage::is_valid_table_name;

use super::collection::SqliteCollection;
use super::pool::DatabasePool;

/// SQLite-backed implementation of `DocumentStore`.
pub struct SqliteStore {
    pool: DatabasePool,
}

impl SqliteStore {
    /// Create a new store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Create a store whose pool connects on first use.
    pub fn connect_lazy(database_url: &str) -> Result<Self, RepositoryError> {
        let pool = DatabasePool::connect_lazy(database_url)
            .map_err(|e| RepositoryError::InvalidUrl(e.to_string()))?;
        Ok(Self::new(pool))
    }
}

impl DocumentStore for SqliteStore {
    type Collection = SqliteCollection;

    fn collection(&self, name: &str) -> Result<SqliteCollection, RepositoryError> {
        if !is_valid_table_name(name) {
            return Err(RepositoryError::InvalidTableName(name.to_string()));
        }
        Ok(SqliteCollection::new(name, self.pool.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoikv_core::storage::collection::Collection;

    fn test_url() -> String {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("store.db").display());
        std::mem::forget(dir);
        url
    }

    #[tokio::test]
    async fn test_collection_for_valid_name() {
        let store = SqliteStore::connect_lazy(&test_url()).unwrap();
        let economy = store.collection("economy").unwrap();
        assert_eq!(economy.name(), "economy");
    }

    #[tokio::test]
    async fn test_collection_rejects_invalid_name() {
        let store = SqliteStore::connect_lazy(&test_url()).unwrap();
        assert!(matches!(
            store.collection("economy\"; DROP TABLE x; --"),
            Err(RepositoryError::InvalidTableName(_))
        ));
        assert!(store.collection("").is_err());
    }

    #[tokio::test]
    async fn test_malformed_url_reports_reason() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=bogus", dir.path().join("store.db").display());

        match SqliteStore::connect_lazy(&url) {
            Err(RepositoryError::InvalidUrl(reason)) => assert!(reason.contains("bogus")),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("malformed url accepted"),
        }
    }
}
