//! The page shown when a page request fails on the server.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// The 500 page, with a description of what went wrong and how to fix it.
pub struct InternalServerError {
    description: &'static str,
    fix: &'static str,
}

impl Default for InternalServerError {
    fn default() -> Self {
        Self {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }
}

impl InternalServerError {
    /// The page for when the database cannot be opened.
    pub fn database_unreachable() -> Self {
        Self {
            description: "Could not reach the database",
            fix: "Check that the database URL points to a readable location and try again.",
        }
    }

    fn into_html(self) -> Html<String> {
        Html(error_view("Internal Server Error", "500", self.description, self.fix).into_string())
    }
}

impl IntoResponse for InternalServerError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.into_html()).into_response()
    }
}
