//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}', use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The page with charts of spending per category.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page for recording and listing transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The fragment listing every transaction, fetched by the transactions page.
pub const TRANSACTIONS_LIST: &str = "/transactions/list";
/// The route for deleting a transaction from the transactions page.
pub const TRANSACTION_VIEW: &str = "/transactions/{transaction_id}";
/// The page for recording and listing budgets.
pub const BUDGETS_VIEW: &str = "/budgets";
/// The fragment listing every budget, fetched by the budgets page.
pub const BUDGETS_LIST: &str = "/budgets/list";

/// The route to access transactions as JSON.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to access budgets as JSON.
pub const BUDGET_API: &str = "/api/budget";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/transactions/{transaction_id}', '{transaction_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
