//! SQLite-backed table collection.
//!
//! Implements `Collection` from `aoikv-core` using sqlx with split read/write pools.
//! Each collection owns one SQLite table; values are stored as JSON text and
//! deserialized on read. The table is created on first use.

use std::sync::Arc;

use aoikv_core::storage::collection::Collection;
use aoikv_types::error::RepositoryError;
use aoikv_types::storage::Record;
use chrono::Utc;
use sqlx::Row;
use tokio::sync::OnceCell;

use super::pool::DatabasePool;

/// One table of `{ key, value }` documents.
///
/// Cloning is cheap and clones share the table-creation state.
#[derive(Clone)]
pub struct SqliteCollection {
    name: String,
    ident: String,
    pool: DatabasePool,
    ready: Arc<OnceCell<()>>,
}

impl SqliteCollection {
    /// Bind a collection to table `name`. The name must already be validated.
    pub(crate) fn new(name: &str, pool: DatabasePool) -> Self {
        Self {
            name: name.to_string(),
            ident: format!("\"{}\"", storage_name(name)),
            pool,
            ready: Arc::new(OnceCell::new()),
        }
    }

    fn ident(&self) -> &str {
        &self.ident
    }

    /// Create the backing table once per collection.
    async fn ensure_table(&self) -> Result<(), RepositoryError> {
        self.ready
            .get_or_try_init(|| async {
                let sql = format!(
                    r#"CREATE TABLE IF NOT EXISTS {} (
                        key TEXT PRIMARY KEY NOT NULL,
                        value TEXT,
                        created_at TEXT NOT NULL,
                        updated_at TEXT NOT NULL
                    )"#,
                    self.ident()
                );
                sqlx::query(&sql)
                    .execute(&self.pool.writer)
                    .await
                    .map(|_| tracing::debug!(table = %self.name, "ensured table"))
                    .map_err(map_sqlx_error)
            })
            .await
            .map(|_| ())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// SQLite table name for the logical table `name`.
///
/// SQLite compares identifiers case-insensitively, so each uppercase letter
/// is written as `^` plus its lowercase form. `^` never occurs in a valid
/// table name, which keeps the mapping injective.
fn storage_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('^');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::Connection
        }
        other => RepositoryError::Query(other.to_string()),
    }
}

fn decode_value(raw: Option<String>) -> Result<serde_json::Value, RepositoryError> {
    match raw {
        Some(text) => serde_json::from_str(&text)
            .map_err(|e| RepositoryError::Query(format!("invalid JSON value: {e}"))),
        None => Ok(serde_json::Value::Null),
    }
}

// ---------------------------------------------------------------------------
// Collection implementation
// ---------------------------------------------------------------------------

impl Collection for SqliteCollection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn find_one(&self, key: &str) -> Result<Option<Record>, RepositoryError> {
        self.ensure_table().await?;

        let sql = format!("SELECT key, value FROM {} WHERE key = ?", self.ident());
        let row = sqlx::query(&sql)
            .bind(key)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(map_sqlx_error)?;

        match row {
            Some(row) => {
                let key: String = row.try_get("key").map_err(map_sqlx_error)?;
                let raw: Option<String> = row.try_get("value").map_err(map_sqlx_error)?;
                Ok(Some(Record::new(key, decode_value(raw)?)))
            }
            None => Ok(None),
        }
    }

    async fn upsert(&self, record: &Record) -> Result<(), RepositoryError> {
        self.ensure_table().await?;

        let now = Utc::now().to_rfc3339();
        let value_str = serde_json::to_string(&record.value)
            .map_err(|e| RepositoryError::Query(format!("failed to serialize value: {e}")))?;

        let sql = format!(
            r#"INSERT INTO {} (key, value, created_at, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at"#,
            self.ident()
        );
        sqlx::query(&sql)
            .bind(&record.key)
            .bind(&value_str)
            .bind(&now)
            .bind(&now)
            .execute(&self.pool.writer)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, RepositoryError> {
        self.ensure_table().await?;

        let sql = format!("DELETE FROM {} WHERE key = ?", self.ident());
        let result = sqlx::query(&sql)
            .bind(key)
            .execute(&self.pool.writer)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn keys(&self) -> Result<Vec<String>, RepositoryError> {
        self.ensure_table().await?;

        let sql = format!("SELECT key FROM {} ORDER BY key", self.ident());
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(map_sqlx_error)?;

        let mut keys = Vec::with_capacity(rows.len());
        for row in &rows {
            let key: String = row.try_get("key").map_err(map_sqlx_error)?;
            keys.push(key);
        }

        Ok(keys)
    }
}
