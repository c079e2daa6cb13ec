//! Database pool with split reader/writer connections in WAL mode.
//!
//! SQLite allows only one writer at a time. This module provides a `DatabasePool`
//! with a multi-connection reader pool for concurrent reads and a single-connection
//! writer pool for serialized writes. Both use WAL journal mode.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

const MAX_READERS: u32 = 8;

/// Split read/write pool for SQLite with WAL mode.
///
/// - `reader`: Multi-connection pool (up to 8) for concurrent SELECT queries.
/// - `writer`: Single-connection pool for serialized DDL and INSERT/UPDATE/DELETE.
#[derive(Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Create a pool that connects on first use.
    ///
    /// Only the URL is validated here; no connection is opened. Must be
    /// called from within a tokio runtime.
    pub fn connect_lazy(database_url: &str) -> Result<Self, sqlx::Error> {
        let (read_opts, write_opts) = connect_options(database_url)?;

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_lazy_with(write_opts);
        let reader = SqlitePoolOptions::new()
            .max_connections(MAX_READERS)
            .connect_lazy_with(read_opts);

        Ok(Self { reader, writer })
    }

    /// Create a pool and open the writer connection eagerly.
    ///
    /// The writer connects first so the database file exists before any
    /// read-only connection is attempted.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let (read_opts, write_opts) = connect_options(database_url)?;

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(write_opts)
            .await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(MAX_READERS)
            .connect_with(read_opts)
            .await?;

        Ok(Self { reader, writer })
    }
}

/// Reader and writer options for `database_url`.
///
/// Both use WAL journal mode and a 5-second busy timeout; the reader is read-only.
fn connect_options(
    database_url: &str,
) -> Result<(SqliteConnectOptions, SqliteConnectOptions), sqlx::Error> {
    let base_opts = SqliteConnectOptions::from_str(database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(5))
        .create_if_missing(true);

    let read_opts = base_opts.clone().read_only(true);
    Ok((read_opts, base_opts))
}
