//! Shared application state.
//!
//! Cloned into the readiness handler and the shutdown cleanup. Cloning only
//! copies the pool handle.

use database::postgres::DatabaseConnection;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from environment variables
    pub config: Config,
    /// PostgreSQL pool, absent when users live in memory
    pub db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn store_name(&self) -> &'static str {
        if self.db.is_some() { "postgres" } else { "memory" }
    }
}
