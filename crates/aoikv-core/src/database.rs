//! Table registry and accessor.
//!
//! `Database` maps table names to collection handles handed out by a
//! [`DocumentStore`]. Reads and writes address documents by composite key
//! (`key` or `key_id`). Reads that find nothing fall back to the host's
//! variable defaults, except for the reserved framework keys.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use aoikv_types::error::DatabaseError;
use aoikv_types::options::DatabaseOptions;
use aoikv_types::storage::{Record, is_reserved_key};

use crate::client::BotClient;
use crate::storage::collection::{Collection, DocumentStore};
use crate::variable::VariableSource;

/// Compose the on-store key for `key` scoped by `id`.
///
/// A missing or empty id leaves the key untouched.
pub fn make_key(key: &str, id: Option<&str>) -> String {
    match id {
        Some(id) if !id.is_empty() => format!("{key}_{id}"),
        _ => key.to_string(),
    }
}

/// Registered handles in registration order.
struct TableMap<C> {
    order: Vec<String>,
    handles: HashMap<String, C>,
}

impl<C: Clone> TableMap<C> {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            handles: HashMap::new(),
        }
    }

    fn get(&self, name: &str) -> Option<C> {
        self.handles.get(name).cloned()
    }

    /// Insert `handle` unless `name` is already registered. Returns the
    /// handle that ends up registered.
    fn insert_once(&mut self, name: &str, handle: C) -> C {
        if let Some(existing) = self.handles.get(name) {
            return existing.clone();
        }
        self.order.push(name.to_string());
        self.handles.insert(name.to_string(), handle.clone());
        handle
    }
}

/// Registry of per-table collections plus the get/set accessors.
pub struct Database<S: DocumentStore> {
    store: S,
    url: String,
    declared: Vec<String>,
    tables: RwLock<TableMap<S::Collection>>,
    variables: Arc<dyn VariableSource>,
}

impl<S: DocumentStore> Database<S> {
    /// Build a registry over `store` and register every declared table the
    /// store accepts. Tables the store rejects stay declared but unregistered.
    pub fn new(store: S, options: DatabaseOptions, variables: Arc<dyn VariableSource>) -> Self {
        let declared = options.declared_tables();
        let mut tables = TableMap::new();

        for name in &declared {
            match store.collection(name) {
                Ok(handle) => {
                    tables.insert_once(name, handle);
                    tracing::debug!(table = %name, "registered table");
                }
                Err(e) => {
                    tracing::warn!(table = %name, error = %e, "skipping table");
                }
            }
        }

        Self {
            store,
            url: options.url,
            declared,
            tables: RwLock::new(tables),
            variables,
        }
    }

    /// Build a registry and attach it to `client` as its data-access facade.
    pub fn attach(client: &BotClient<S>, store: S, options: DatabaseOptions) -> Arc<Self> {
        let db = Arc::new(Self::new(store, options, client.variables()));
        client.set_db(Arc::clone(&db));
        tracing::info!(tables = db.tables().len(), "database attached to client");
        db
    }

    /// Connection URL the registry was configured with.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The handle registered for `name`. Never creates one.
    pub fn table(&self, name: &str) -> Option<S::Collection> {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
    }

    /// Registered table names in registration order.
    pub fn tables(&self) -> Vec<String> {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .clone()
    }

    /// Table names declared in the options, normalized.
    pub fn declared(&self) -> &[String] {
        &self.declared
    }

    /// Resolve `table` to a handle, materializing declared tables on demand.
    ///
    /// `Ok(None)` means the table is declared but the store refused a handle.
    fn resolve(&self, table: &str) -> Result<Option<S::Collection>, DatabaseError> {
        if let Some(handle) = self.table(table) {
            return Ok(Some(handle));
        }
        if !self.declared.iter().any(|name| name == table) {
            return Err(DatabaseError::TableNotDefined(table.to_string()));
        }

        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = tables.get(table) {
            return Ok(Some(handle));
        }
        match self.store.collection(table) {
            Ok(handle) => {
                tracing::debug!(table, "materialized table");
                Ok(Some(tables.insert_once(table, handle)))
            }
            Err(e) => {
                tracing::warn!(table, error = %e, "table handle unavailable");
                Ok(None)
            }
        }
    }

    /// Read the record for `key` (scoped by `id`) from `table`.
    ///
    /// Missing records fall back to the variable default for `key`, unless
    /// `key` is reserved. A missing or null default yields `None`.
    pub async fn get(
        &self,
        table: &str,
        key: &str,
        id: Option<&str>,
    ) -> Result<Option<Record>, DatabaseError> {
        let Some(handle) = self.resolve(table)? else {
            return Ok(None);
        };

        let composite = make_key(key, id);
        let found = handle.find_one(&composite).await?;

        if is_reserved_key(key) || found.is_some() {
            return Ok(found);
        }

        match self.variables.default_value(key, table) {
            Some(serde_json::Value::Null) | None => Ok(None),
            Some(default) => {
                tracing::debug!(table, key = %composite, "using variable default");
                Ok(Some(Record::new(composite, default)))
            }
        }
    }

    /// Upsert `value` under `key` (scoped by `id`) in `table`.
    ///
    /// Returns `false` when the table is declared but no handle could be
    /// obtained.
    pub async fn set(
        &self,
        table: &str,
        key: &str,
        id: Option<&str>,
        value: serde_json::Value,
    ) -> Result<bool, DatabaseError> {
        let Some(handle) = self.resolve(table)? else {
            return Ok(false);
        };

        let record = Record::new(make_key(key, id), value);
        handle.upsert(&record).await?;
        Ok(true)
    }

    /// Delete the record for `key` (scoped by `id`) from `table`.
    ///
    /// Returns whether a record was removed.
    pub async fn delete(
        &self,
        table: &str,
        key: &str,
        id: Option<&str>,
    ) -> Result<bool, DatabaseError> {
        let Some(handle) = self.resolve(table)? else {
            return Ok(false);
        };

        Ok(handle.delete(&make_key(key, id)).await?)
    }

    /// All composite keys stored in `table`, sorted.
    pub async fn keys(&self, table: &str) -> Result<Vec<String>, DatabaseError> {
        let Some(handle) = self.resolve(table)? else {
            return Ok(Vec::new());
        };

        Ok(handle.keys().await?)
    }
}
