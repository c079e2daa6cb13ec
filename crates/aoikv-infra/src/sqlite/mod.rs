//! SQLite storage layer.
//!
//! Document store backed by SQLite with WAL mode and split read/write
//! connection pools. Each table name maps to one SQLite table.

pub mod collection;
pub mod pool;
pub mod store;
