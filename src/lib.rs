//! A minimal personal finance tracker.
//!
//! Transactions and monthly budgets are recorded through a small JSON API and
//! a handful of server-rendered pages, and spending is summarised per category
//! on a dashboard of charts.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::FormRejection;
use axum_server::Handle;
use serde::{Deserialize, Serialize};
use tokio::signal;

mod alert;
mod amount;
mod app_state;
mod budget;
mod dashboard;
mod database_id;
mod db;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
#[cfg(test)]
mod test_utils;
mod transaction;

pub use app_state::AppState;
pub use budget::{Budget, NewBudget, create_budget, get_all_budgets};
pub use dashboard::sum_by_category;
pub use database_id::{BudgetId, TransactionId};
pub use db::{Database, initialize as initialize_db};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::{
    NewTransaction, Transaction, create_transaction, delete_transaction, get_all_transactions,
};

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {error}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The database could not be opened, e.g. the path points into a
    /// directory that does not exist.
    #[error("could not connect to the database: {0}")]
    ConnectionError(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// The request body could not be decoded as the expected JSON document.
    ///
    /// `status` is the status code chosen by the JSON extractor, e.g. 400 for
    /// syntax errors and 422 for a body with the wrong shape.
    #[error("invalid JSON body: {message}")]
    InvalidJson {
        /// The status code to respond with.
        status: StatusCode,
        /// A description of what was wrong with the body.
        message: String,
    },

    /// A form submitted from a page could not be decoded, e.g. the amount
    /// is not a number.
    #[error("invalid form: {message}")]
    InvalidForm {
        /// The status code to respond with.
        status: StatusCode,
        /// A description of what was wrong with the form.
        message: String,
    },
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidJson {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<FormRejection> for Error {
    fn from(rejection: FormRejection) -> Self {
        let message = rejection.to_string();

        Error::InvalidForm {
            status: rejection.into_response().status(),
            message,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::ConnectionError(_) => {
                tracing::error!("{self}");
                InternalServerError::database_unreachable().into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error as an alert fragment for htmx requests.
    fn into_alert_response(self) -> Response {
        tracing::error!("{self}");

        let (status, details) = match &self {
            Error::ConnectionError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not reach the database, check the server logs for more details.",
            ),
            Error::InvalidJson { status, .. } => (*status, "The submitted data was malformed."),
            Error::InvalidForm { status, .. } => (
                *status,
                "Check that the amount is a number and submit the form again.",
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred, check the server logs for more details.",
            ),
        };

        (status, Alert::error("Something went wrong", details).into_html()).into_response()
    }
}

/// An [Error] returned from a route that htmx swaps into the page.
///
/// Unlike [Error], which renders a full page, this responds with an alert
/// fragment for the page's alert container.
#[derive(Debug, PartialEq)]
pub struct AlertError(pub Error);

impl From<Error> for AlertError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl From<FormRejection> for AlertError {
    fn from(rejection: FormRejection) -> Self {
        Self(rejection.into())
    }
}

impl IntoResponse for AlertError {
    fn into_response(self) -> Response {
        self.0.into_alert_response()
    }
}

/// The JSON body sent back by the API when a request fails.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    /// A human readable description of the failure.
    pub error: String,
}

/// An [Error] returned from a JSON API route.
///
/// Unlike [Error], which renders an HTML page, this responds with an
/// [ErrorBody].
#[derive(Debug, PartialEq)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection.into())
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(error: rusqlite::Error) -> Self {
        Self(error.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::InvalidJson { status, .. } | Error::InvalidForm { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self.0 {
            Error::InvalidJson { .. } => tracing::warn!("rejected request body: {}", self.0),
            error => tracing::error!("API request failed: {error}"),
        }

        let message = match &self.0 {
            Error::InvalidJson { .. } | Error::ConnectionError(_) => self.0.to_string(),
            _ => "an unexpected error occurred".to_owned(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
