//! Application router configuration for the pages and the JSON API.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get},
};

use crate::{
    AppState,
    budget::{
        create_budget_api, create_budget_endpoint, get_budgets_list, get_budgets_page,
        list_budgets_api,
    },
    dashboard::get_dashboard_page,
    endpoints,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_api, create_transaction_endpoint, delete_transaction_api,
        delete_transaction_endpoint, get_transactions_list, get_transactions_page,
        list_transactions_api,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(
            endpoints::TRANSACTIONS_VIEW,
            get(get_transactions_page).post(create_transaction_endpoint),
        )
        .route(endpoints::TRANSACTIONS_LIST, get(get_transactions_list))
        .route(
            endpoints::TRANSACTION_VIEW,
            delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::BUDGETS_VIEW,
            get(get_budgets_page).post(create_budget_endpoint),
        )
        .route(endpoints::BUDGETS_LIST, get(get_budgets_list));

    let api_routes = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_api)
                .post(create_transaction_api)
                .delete(delete_transaction_api),
        )
        .route(
            endpoints::BUDGET_API,
            get(list_budgets_api).post(create_budget_api),
        );

    page_routes
        .merge(api_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::DASHBOARD_VIEW);
    }
}
