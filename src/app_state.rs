//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::Database;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The handle to the record store, shared by every request.
    pub database: Database,
}

impl AppState {
    /// Create a new [AppState] for the database at `database_url`.
    ///
    /// The database is not opened until the first request needs it.
    pub fn new(database_url: &str) -> Self {
        Self {
            database: Database::new(database_url),
        }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.database.clone()
    }
}
