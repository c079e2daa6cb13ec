//! Document store and collection traits.
//!
//! A `DocumentStore` hands out one `Collection` per table name. Collections
//! hold `{ key, value }` documents addressed by composite key.

use aoikv_types::error::RepositoryError;
use aoikv_types::storage::Record;

/// A backing store able to produce table-scoped collection handles.
///
/// Handing out a handle does no IO; the collection is free to create its
/// backing table on first use.
pub trait DocumentStore: Send + Sync {
    type Collection: Collection;

    /// Create a handle for the table `name`.
    fn collection(&self, name: &str) -> Result<Self::Collection, RepositoryError>;
}

/// A single table of `{ key, value }` documents.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait Collection: Clone + Send + Sync {
    /// Table name this handle is bound to.
    fn name(&self) -> &str;

    /// Find the document stored under `key`. Returns None if absent.
    fn find_one(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<Record>, RepositoryError>> + Send;

    /// Insert or fully replace the document with `record.key`.
    fn upsert(
        &self,
        record: &Record,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Delete the document under `key`. Returns whether one existed.
    fn delete(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<bool, RepositoryError>> + Send;

    /// All keys in the table, sorted.
    fn keys(&self) -> impl std::future::Future<Output = Result<Vec<String>, RepositoryError>> + Send;
}
