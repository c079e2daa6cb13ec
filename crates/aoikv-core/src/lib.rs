//! Table registry and storage ports for aoikv.
//!
//! This crate defines the "ports" (store traits) that the infrastructure
//! layer implements, plus the `Database` registry that routes reads and
//! writes to per-table collections. It depends only on `aoikv-types` --
//! never on `aoikv-infra` or any database crate.

pub mod client;
pub mod database;
pub mod storage;
pub mod variable;
