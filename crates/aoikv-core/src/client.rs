//! Host client facade.
//!
//! `BotClient` stands in for the host framework object the registry attaches
//! itself to. It owns the variable source consulted for defaults and, once a
//! `Database` is attached, exposes it through [`BotClient::db`].

use std::sync::{Arc, PoisonError, RwLock};

use crate::database::Database;
use crate::storage::collection::DocumentStore;
use crate::variable::VariableSource;

/// Host framework handle the table registry attaches to.
pub struct BotClient<S: DocumentStore> {
    variables: Arc<dyn VariableSource>,
    db: RwLock<Option<Arc<Database<S>>>>,
}

impl<S: DocumentStore> BotClient<S> {
    /// Create a client that resolves variable defaults through `variables`.
    pub fn new(variables: Arc<dyn VariableSource>) -> Self {
        Self {
            variables,
            db: RwLock::new(None),
        }
    }

    pub fn variables(&self) -> Arc<dyn VariableSource> {
        Arc::clone(&self.variables)
    }

    /// The attached table registry, if any.
    pub fn db(&self) -> Option<Arc<Database<S>>> {
        self.db
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Attach `db` as this client's data-access facade, replacing any previous one.
    pub(crate) fn set_db(&self, db: Arc<Database<S>>) {
        *self.db.write().unwrap_or_else(PoisonError::into_inner) = Some(db);
    }
}
