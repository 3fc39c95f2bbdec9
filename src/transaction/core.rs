//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, amount::deserialize_optional_amount, database_id::TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Only the ID is guaranteed to be set. Fields left out when the transaction
/// was created are `None` and are omitted from the JSON representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the database.
    pub id: TransactionId,
    /// The amount of money spent or earned in this transaction.
    ///
    /// There is no sign convention, both positive and negative amounts are
    /// stored as given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// When the transaction happened, as free-form text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// A text description of what the transaction was for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The category used to group the transaction on the dashboard, e.g.
    /// "food" or "transport".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// The fields for a transaction that has not been stored yet.
///
/// Every field is optional and no field is validated, whatever the client
/// sends is stored. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// The amount of money spent or earned.
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    pub amount: Option<f64>,
    /// When the transaction happened.
    #[serde(default)]
    pub date: Option<String>,
    /// What the transaction was for.
    #[serde(default)]
    pub description: Option<String>,
    /// The category to group the transaction under.
    #[serde(default)]
    pub category: Option<String>,
}

impl NewTransaction {
    /// Create the fields for a transaction with an amount and category, the
    /// most common shape for tests and sample data.
    pub fn new(amount: f64, category: &str) -> Self {
        Self {
            amount: Some(amount),
            category: Some(category.to_owned()),
            ..Default::default()
        }
    }

    /// Set the date of the transaction.
    pub fn date(mut self, date: &str) -> Self {
        self.date = Some(date.to_owned());
        self
    }

    /// Set the description of the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Store a new transaction exactly as given and return it with its ID.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO transactions (amount, date, description, category)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, amount, date, description, category",
        )?
        .query_row(
            (
                transaction.amount,
                transaction.date,
                transaction.description,
                transaction.category,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Get every transaction in the database.
///
/// No ordering is applied, the rows come back in the order SQLite stores them.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare("SELECT id, amount, date, description, category FROM transactions")?
        .query_map([], map_transaction_row)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|error| error.into())
}

/// The number of rows removed by a delete.
pub type RowsAffected = usize;

/// Delete the transaction with `id`.
///
/// Deleting an ID that does not exist is not an error, it affects zero rows.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn delete_transaction(
    id: TransactionId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM transactions WHERE id = :id", &[(":id", &id)])
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// Every column apart from the ID is nullable so that partial records can be
/// stored.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL,
                date TEXT,
                description TEXT,
                category TEXT
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let date = row.get(2)?;
    let description = row.get(3)?;
    let category = row.get(4)?;

    Ok(Transaction {
        id,
        amount,
        date,
        description,
        category,
    })
}

// ============================================================================
// TESTS
// ============================================================================
