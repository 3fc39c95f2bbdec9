//! Defines the endpoint for creating a new transaction from the transactions page.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::{Form, WithRejection};
use axum_htmx::HX_TRIGGER;

use crate::{
    AlertError, Database,
    transaction::{
        NewTransaction, create_transaction, transactions_page::TRANSACTIONS_CHANGED_EVENT,
    },
};

/// A route handler for creating a new transaction from a form.
///
/// Responds without a body and with an HX-Trigger header that makes the
/// transactions page fetch its table again. A form that cannot be decoded,
/// e.g. one with a non-numeric amount, gets an alert instead.
pub async fn create_transaction_endpoint(
    State(database): State<Database>,
    WithRejection(Form(form), _): WithRejection<Form<NewTransaction>, AlertError>,
) -> Response {
    let result = database
        .connect()
        .and_then(|connection| create_transaction(form, &connection));

    match result {
        Ok(transaction) => {
            tracing::debug!("created transaction {}", transaction.id);
            [(HX_TRIGGER, TRANSACTIONS_CHANGED_EVENT)].into_response()
        }
        Err(error) => {
            tracing::error!("could not create transaction: {error}");
            error.into_alert_response()
        }
    }
}
