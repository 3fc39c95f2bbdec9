//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the fields for creating one
//! - Database functions for storing, listing and deleting transactions
//! - The JSON API and the handlers for the transactions page

mod api;
mod core;
mod create_endpoint;
mod delete_endpoint;
mod transactions_page;

pub use api::{create_transaction_api, delete_transaction_api, list_transactions_api};
pub use core::{
    NewTransaction, Transaction, create_transaction, create_transaction_table,
    delete_transaction, get_all_transactions,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use transactions_page::{get_transactions_list, get_transactions_page};
