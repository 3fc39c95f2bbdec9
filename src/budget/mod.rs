//! Monthly budgets per category.
//!
//! Budgets are recorded and listed only. They cannot be edited or deleted and
//! are never compared against transactions.

mod api;
mod budgets_page;
mod core;
mod create_endpoint;

pub use api::{create_budget_api, list_budgets_api};
pub use budgets_page::{get_budgets_list, get_budgets_page};
pub use core::{Budget, NewBudget, create_budget, create_budget_table, get_all_budgets};
pub use create_endpoint::create_budget_endpoint;
