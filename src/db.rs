//! The persistence gateway: a lazily opened, memoized SQLite connection.

use std::sync::{Arc, Mutex, MutexGuard};

use once_cell::sync::OnceCell;
use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{Error, budget::create_budget_table, transaction::create_transaction_table};

/// The URL scheme accepted in front of a database path, e.g. `sqlite://finance.db`.
const SQLITE_SCHEME: &str = "sqlite://";

/// The database path that opens a private, in-memory database.
const IN_MEMORY: &str = ":memory:";

/// A handle to the record store.
///
/// The handle is cheap to clone and every clone shares the same connection.
/// The connection is opened on the first call to [Database::connect] and is
/// reused by every later call, so it is safe to connect before every store
/// operation.
#[derive(Debug, Clone)]
pub struct Database {
    url: Arc<str>,
    connection: Arc<OnceCell<Mutex<Connection>>>,
}

impl Database {
    /// Create a handle for the database at `url` without opening it.
    ///
    /// `url` is a file path, optionally prefixed with `sqlite://`, or
    /// `:memory:`.
    pub fn new(url: &str) -> Self {
        Self {
            url: Arc::from(url),
            connection: Arc::new(OnceCell::new()),
        }
    }

    /// Create a handle for a private, in-memory database.
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY)
    }

    /// The URL this handle connects to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether the connection has been opened yet.
    pub fn is_connected(&self) -> bool {
        self.connection.get().is_some()
    }

    /// Get the shared connection, opening it first if no connection exists.
    ///
    /// Concurrent callers that race to open the connection wait for the first
    /// one to finish rather than opening a second connection.
    ///
    /// # Errors
    /// Returns an [Error::ConnectionError] if the database cannot be opened or
    /// its tables cannot be created, and an [Error::DatabaseLockError] if the
    /// connection lock is poisoned.
    pub fn connect(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        let connection = self
            .connection
            .get_or_try_init(|| open_connection(&self.url).map(Mutex::new))?;

        connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

fn open_connection(url: &str) -> Result<Connection, Error> {
    let path = url.strip_prefix(SQLITE_SCHEME).unwrap_or(url);

    let connection = if path == IN_MEMORY {
        Connection::open_in_memory()
    } else {
        Connection::open(path)
    }
    .map_err(|error| {
        tracing::error!("could not open database at \"{path}\": {error}");
        Error::ConnectionError(error.to_string())
    })?;

    initialize(&connection).map_err(|error| {
        tracing::error!("could not initialize database at \"{path}\": {error}");
        Error::ConnectionError(error.to_string())
    })?;

    tracing::info!("Connected to database at \"{path}\"");

    Ok(connection)
}

/// Create the tables for the transaction and budget records if they do not
/// already exist.
///
/// # Errors
/// Returns an error if a table cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;
    create_budget_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
