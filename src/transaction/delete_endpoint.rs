//! Defines the endpoint for deleting a transaction from the transactions page.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HX_TRIGGER;

use crate::{
    Database,
    database_id::TransactionId,
    transaction::{delete_transaction, transactions_page::TRANSACTIONS_CHANGED_EVENT},
};

/// A route handler for deleting a transaction.
///
/// Like the JSON API, deleting a transaction that does not exist succeeds.
/// Responds with an HX-Trigger header that makes the transactions page fetch
/// its table again.
pub async fn delete_transaction_endpoint(
    State(database): State<Database>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let result = database
        .connect()
        .and_then(|connection| delete_transaction(transaction_id, &connection));

    match result {
        Ok(rows_affected) => {
            tracing::debug!("deleted {rows_affected} transaction(s) with ID {transaction_id}");
            [(HX_TRIGGER, TRANSACTIONS_CHANGED_EVENT)].into_response()
        }
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::delete};
    use axum_htmx::HX_TRIGGER;
    use axum_test::TestServer;

    use crate::{
        Database, endpoints,
        endpoints::format_endpoint,
        transaction::{
            NewTransaction, create_transaction, delete_endpoint::delete_transaction_endpoint,
            get_all_transactions, transactions_page::TRANSACTIONS_CHANGED_EVENT,
        },
    };

    fn get_test_server(database: Database) -> TestServer {
        let app = Router::new()
            .route(
                endpoints::TRANSACTION_VIEW,
                delete(delete_transaction_endpoint),
            )
            .with_state(database);

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn deletes_transaction() {
        let database = Database::in_memory();
        let (keep, remove) = {
            let connection = database.connect().unwrap();
            (
                create_transaction(NewTransaction::new(1.0, "keep"), &connection).unwrap(),
                create_transaction(NewTransaction::new(2.0, "remove"), &connection).unwrap(),
            )
        };
        let server = get_test_server(database.clone());

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION_VIEW, remove.id))
            .await;

        response.assert_status_ok();
        assert_eq!(response.header(HX_TRIGGER), TRANSACTIONS_CHANGED_EVENT);
        let connection = database.connect().unwrap();
        assert_eq!(get_all_transactions(&connection).unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn deleting_missing_transaction_succeeds() {
        let server = get_test_server(Database::in_memory());

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION_VIEW, 42))
            .await;

        response.assert_status_ok();
        assert_eq!(response.header(HX_TRIGGER), TRANSACTIONS_CHANGED_EVENT);
    }
}
