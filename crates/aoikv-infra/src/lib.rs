//! Infrastructure layer for aoikv.
//!
//! Contains the SQLite implementation of the store ports defined in
//! `aoikv-core`, configuration loading, and [`open`], which wires a
//! configured store, host client and table registry together.

pub mod config;
pub mod sqlite;

use std::sync::Arc;

use aoikv_core::client::BotClient;
use aoikv_core::database::Database;
use aoikv_core::variable::registry::VariableRegistry;
use aoikv_types::config::AdapterConfig;
use aoikv_types::error::RepositoryError;

use sqlite::store::SqliteStore;

/// Build a client and attach a SQLite-backed table registry to it.
///
/// Variable defaults come from `config.variables`; the URL falls back to
/// [`config::default_database_url`]. No connection is opened until the first
/// read or write. Must be called from within a tokio runtime.
pub fn open(
    config: &AdapterConfig,
) -> Result<(BotClient<SqliteStore>, Arc<Database<SqliteStore>>), RepositoryError> {
    let options = config.database_options(&config::default_database_url());
    let store = SqliteStore::connect_lazy(&options.url)?;

    let variables: VariableRegistry = config.variables.iter().cloned().collect();
    let client = BotClient::new(Arc::new(variables));
    let db = Database::attach(&client, store, options);

    Ok((client, db))
}
