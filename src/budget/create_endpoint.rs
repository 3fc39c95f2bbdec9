//! Defines the endpoint for creating a new budget from the budgets page.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{Form, WithRejection};
use axum_htmx::HX_TRIGGER;

use crate::{
    AlertError, Database,
    budget::{NewBudget, budgets_page::BUDGETS_CHANGED_EVENT, create_budget},
};

/// A route handler for creating a new budget from a form.
///
/// Responds without a body and with an HX-Trigger header that makes the
/// budgets page fetch its table again. A form that cannot be decoded gets an
/// alert instead.
pub async fn create_budget_endpoint(
    State(database): State<Database>,
    WithRejection(Form(form), _): WithRejection<Form<NewBudget>, AlertError>,
) -> Response {
    match database
        .connect()
        .and_then(|connection| create_budget(form, &connection))
    {
        Ok(budget) => {
            tracing::debug!("created budget {}", budget.id);
            [(HX_TRIGGER, BUDGETS_CHANGED_EVENT)].into_response()
        }
        Err(error) => {
            tracing::error!("could not create budget: {error}");
            error.into_alert_response()
        }
    }
}
