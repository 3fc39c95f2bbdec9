//! Defines the budget model and its database queries.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, amount::deserialize_optional_amount, database_id::BudgetId};

/// A spending ceiling for a category in a month.
///
/// Budgets are only recorded, nothing checks spending against them. Several
/// budgets may share a category and month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The ID of the budget, assigned by the database.
    pub id: BudgetId,
    /// The category the budget applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// The most that should be spent in the category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// The month the budget applies to as free-form text, e.g. "2024-01".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
}

/// The fields for a budget that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewBudget {
    /// The category the budget applies to.
    #[serde(default)]
    pub category: Option<String>,
    /// The most that should be spent in the category.
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    pub amount: Option<f64>,
    /// The month the budget applies to.
    #[serde(default)]
    pub month: Option<String>,
}

impl NewBudget {
    /// Create the fields for a budget with every field set.
    pub fn new(category: &str, amount: f64, month: &str) -> Self {
        Self {
            category: Some(category.to_owned()),
            amount: Some(amount),
            month: Some(month.to_owned()),
        }
    }
}

/// Store a new budget exactly as given and return it with its ID.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_budget(budget: NewBudget, connection: &Connection) -> Result<Budget, Error> {
    let budget = connection
        .prepare(
            "INSERT INTO budgets (category, amount, month)
             VALUES (?1, ?2, ?3)
             RETURNING id, category, amount, month",
        )?
        .query_row(
            (budget.category, budget.amount, budget.month),
            map_budget_row,
        )?;

    Ok(budget)
}

/// Get every budget in the database, in no particular order.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_all_budgets(connection: &Connection) -> Result<Vec<Budget>, Error> {
    connection
        .prepare("SELECT id, category, amount, month FROM budgets")?
        .query_map([], map_budget_row)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|error| error.into())
}

/// Create the budget table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_budget_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS budgets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category TEXT,
                amount REAL,
                month TEXT
                )",
        (),
    )?;

    Ok(())
}

fn map_budget_row(row: &Row) -> Result<Budget, rusqlite::Error> {
    Ok(Budget {
        id: row.get(0)?,
        category: row.get(1)?,
        amount: row.get(2)?,
        month: row.get(3)?,
    })
}

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;

    use crate::{
        budget::{Budget, NewBudget, create_budget, get_all_budgets},
        db::initialize,
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn create_then_list_includes_record() {
        let conn = get_test_connection();

        let budget = create_budget(NewBudget::new("food", 400.0, "2024-01"), &conn).unwrap();

        assert_eq!(
            budget,
            Budget {
                id: budget.id,
                category: Some("food".to_owned()),
                amount: Some(400.0),
                month: Some("2024-01".to_owned()),
            }
        );
        assert_eq!(get_all_budgets(&conn).unwrap(), vec![budget]);
    }

    #[test]
    fn budgets_may_share_category_and_month() {
        let conn = get_test_connection();

        let first = create_budget(NewBudget::new("food", 400.0, "2024-01"), &conn).unwrap();
        let second = create_budget(NewBudget::new("food", 250.0, "2024-01"), &conn).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(get_all_budgets(&conn).unwrap(), vec![first, second]);
    }

    #[test]
    fn missing_fields_are_stored_as_none() {
        let conn = get_test_connection();

        let budget = create_budget(NewBudget::default(), &conn).unwrap();

        assert_eq!(budget.category, None);
        assert_eq!(budget.amount, None);
        assert_eq!(budget.month, None);
    }

    #[test]
    fn list_on_empty_store_is_empty() {
        let conn = get_test_connection();

        assert!(get_all_budgets(&conn).unwrap().is_empty());
    }
}
