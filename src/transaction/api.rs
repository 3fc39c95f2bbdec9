//! The JSON API for transactions.

use axum::{Json, extract::State};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use crate::{
    ApiError, Database,
    database_id::TransactionId,
    transaction::{
        NewTransaction, Transaction, create_transaction, delete_transaction, get_all_transactions,
    },
};

/// The message sent back after a delete, whether or not anything was deleted.
pub const TRANSACTION_DELETED_MESSAGE: &str = "Transaction deleted";

/// The body of a request to delete a transaction.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DeleteTransactionRequest {
    /// The transaction to delete. A missing ID deletes nothing.
    #[serde(default)]
    pub id: Option<TransactionId>,
}

/// The body of the response to a delete request.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// A confirmation message.
    pub message: String,
}

/// A route handler that responds with every stored transaction.
pub async fn list_transactions_api(
    State(database): State<Database>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let connection = database.connect()?;
    let transactions = get_all_transactions(&connection)?;

    Ok(Json(transactions))
}

/// A route handler that stores the transaction in the request body and
/// responds with the stored transaction.
pub async fn create_transaction_api(
    State(database): State<Database>,
    WithRejection(Json(fields), _): WithRejection<Json<NewTransaction>, ApiError>,
) -> Result<Json<Transaction>, ApiError> {
    let connection = database.connect()?;
    let transaction = create_transaction(fields, &connection)?;

    tracing::debug!("created transaction {}", transaction.id);

    Ok(Json(transaction))
}

/// A route handler that deletes the transaction whose ID is in the request
/// body.
///
/// There is no existence check, deleting a transaction that does not exist
/// reports success.
pub async fn delete_transaction_api(
    State(database): State<Database>,
    WithRejection(Json(request), _): WithRejection<Json<DeleteTransactionRequest>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    let connection = database.connect()?;

    if let Some(id) = request.id {
        let rows_affected = delete_transaction(id, &connection)?;
        tracing::debug!("deleted {rows_affected} transaction(s) with ID {id}");
    }

    Ok(Json(MessageResponse {
        message: TRANSACTION_DELETED_MESSAGE.to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        http::{StatusCode, header::CONTENT_TYPE},
        routing::get,
    };
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{
        Database, ErrorBody, endpoints,
        transaction::{
            NewTransaction, Transaction, create_transaction, get_all_transactions,
            api::{
                MessageResponse, TRANSACTION_DELETED_MESSAGE, create_transaction_api,
                delete_transaction_api, list_transactions_api,
            },
        },
    };

    fn get_test_server(database: Database) -> TestServer {
        let app = Router::new()
            .route(
                endpoints::TRANSACTIONS_API,
                get(list_transactions_api)
                    .post(create_transaction_api)
                    .delete(delete_transaction_api),
            )
            .with_state(database);

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty_array() {
        let server = get_test_server(Database::in_memory());

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn create_responds_with_stored_transaction() {
        let database = Database::in_memory();
        let server = get_test_server(database.clone());

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "amount": 50,
                "date": "2024-01-15",
                "description": "Groceries",
                "category": "food"
            }))
            .await;

        response.assert_status_ok();
        let created = response.json::<Transaction>();
        assert_eq!(created.amount, Some(50.0));
        assert_eq!(created.date.as_deref(), Some("2024-01-15"));
        assert_eq!(created.description.as_deref(), Some("Groceries"));
        assert_eq!(created.category.as_deref(), Some("food"));

        let connection = database.connect().unwrap();
        assert_eq!(get_all_transactions(&connection).unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn create_accepts_partial_bodies() {
        let server = get_test_server(Database::in_memory());

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({ "description": "no amount", "unknown": true }))
            .await;

        response.assert_status_ok();
        let created = response.json::<serde_json::Value>();
        assert_eq!(created["description"], "no amount");
        assert!(created.get("amount").is_none(), "got {created}");
        assert!(created.get("unknown").is_none(), "got {created}");
    }

    #[tokio::test]
    async fn create_then_list_includes_record() {
        let server = get_test_server(Database::in_memory());
        let created = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({ "amount": "-20.5", "category": "transport" }))
            .await
            .json::<Transaction>();

        let transactions = server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .json::<Vec<Transaction>>();

        assert_eq!(created.amount, Some(-20.5));
        assert_eq!(transactions, vec![created]);
    }

    #[tokio::test]
    async fn create_rejects_malformed_json() {
        let server = get_test_server(Database::in_memory());

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .text("{\"amount\": ")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.header(CONTENT_TYPE),
            "application/json",
            "errors from the API should be JSON"
        );
        let body = response.json::<ErrorBody>();
        assert!(body.error.contains("invalid JSON"), "got {:?}", body.error);
    }

    #[tokio::test]
    async fn create_rejects_non_numeric_amount() {
        let server = get_test_server(Database::in_memory());

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({ "amount": "fifty" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_rejects_non_finite_amounts_without_storing() {
        let database = Database::in_memory();
        let server = get_test_server(database.clone());

        for amount in ["NaN", "inf", "Infinity", "1e400"] {
            let response = server
                .post(endpoints::TRANSACTIONS_API)
                .json(&json!({ "amount": amount, "category": "x" }))
                .await;

            response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
            let body = response.json::<ErrorBody>();
            assert!(body.error.contains("not a finite amount"), "{amount}: {:?}", body.error);
        }

        let connection = database.connect().unwrap();
        assert_eq!(get_all_transactions(&connection).unwrap(), vec![]);
    }

    #[tokio::test]
    async fn delete_removes_transaction() {
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
            .delete(endpoints::TRANSACTIONS_API)
            .json(&json!({ "id": remove.id }))
            .await;

        response.assert_status_ok();
        response.assert_json(&MessageResponse {
            message: TRANSACTION_DELETED_MESSAGE.to_owned(),
        });
        let connection = database.connect().unwrap();
        assert_eq!(get_all_transactions(&connection).unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn delete_missing_transaction_reports_success() {
        let database = Database::in_memory();
        let existing = {
            let connection = database.connect().unwrap();
            create_transaction(NewTransaction::new(1.0, "food"), &connection).unwrap()
        };
        let server = get_test_server(database.clone());

        let response = server
            .delete(endpoints::TRANSACTIONS_API)
            .json(&json!({ "id": existing.id + 1 }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "message": TRANSACTION_DELETED_MESSAGE }));
        let connection = database.connect().unwrap();
        assert_eq!(get_all_transactions(&connection).unwrap(), vec![existing]);
    }

    #[tokio::test]
    async fn delete_without_id_reports_success() {
        let server = get_test_server(Database::in_memory());

        let response = server
            .delete(endpoints::TRANSACTIONS_API)
            .json(&json!({}))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "message": TRANSACTION_DELETED_MESSAGE }));
    }

    #[tokio::test]
    async fn unreachable_database_is_server_error() {
        let server = get_test_server(Database::new("/no/such/directory/finance.db"));

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<ErrorBody>();
        assert!(body.error.contains("could not connect"), "got {:?}", body.error);
    }
}
