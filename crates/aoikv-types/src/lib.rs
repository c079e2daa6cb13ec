//! Shared domain types for aoikv.
//!
//! Table options, stored records, host variable definitions and the error
//! enums used across the workspace.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod options;
pub mod storage;
