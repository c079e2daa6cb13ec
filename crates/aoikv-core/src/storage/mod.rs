//! Storage ports for aoikv.
//!
//! Defines the document store and per-table collection traits.
//! Implementations live in aoikv-infra.

pub mod collection;
