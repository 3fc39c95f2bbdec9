//! Database ID type definitions.

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseId = i64;
/// The ID of a stored [crate::Transaction].
pub type TransactionId = DatabaseId;
/// The ID of a stored [crate::Budget].
pub type BudgetId = DatabaseId;
