//! The JSON API for budgets.

use axum::{Json, extract::State};
use axum_extra::extract::WithRejection;

use crate::{
    ApiError, Database,
    budget::{Budget, NewBudget, create_budget, get_all_budgets},
};

/// A route handler that responds with every stored budget.
pub async fn list_budgets_api(
    State(database): State<Database>,
) -> Result<Json<Vec<Budget>>, ApiError> {
    let connection = database.connect()?;
    let budgets = get_all_budgets(&connection)?;

    Ok(Json(budgets))
}

/// A route handler that stores the budget in the request body and responds
/// with the stored budget.
pub async fn create_budget_api(
    State(database): State<Database>,
    WithRejection(Json(fields), _): WithRejection<Json<NewBudget>, ApiError>,
) -> Result<Json<Budget>, ApiError> {
    let connection = database.connect()?;
    let budget = create_budget(fields, &connection)?;

    tracing::debug!("created budget {}", budget.id);

    Ok(Json(budget))
}
