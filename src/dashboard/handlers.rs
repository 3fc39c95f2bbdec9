//! Dashboard HTTP handlers and view rendering.

use std::collections::HashMap;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Database, Error,
    dashboard::{
        aggregation::sum_by_category,
        charts::{
            DashboardChart, category_share_chart, category_totals_chart, charts_script,
            charts_view,
        },
    },
    endpoints,
    html::{ECHARTS_SCRIPT, HeadElement, base, link},
    navigation::NavBar,
    transaction::get_all_transactions,
};

/// Display a page with charts of spending per category.
pub async fn get_dashboard_page(State(database): State<Database>) -> Result<Response, Error> {
    let transactions = {
        let connection = database.connect()?;
        get_all_transactions(&connection)
            .inspect_err(|error| tracing::error!("could not get transactions: {error}"))?
    };

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    if transactions.is_empty() {
        return Ok(dashboard_no_data_view(nav_bar).into_response());
    }

    let category_totals = sum_by_category(&transactions);
    tracing::debug!(
        "aggregated {} transactions into {} categories",
        transactions.len(),
        category_totals.len()
    );

    let charts = build_dashboard_charts(&category_totals);

    Ok(dashboard_view(nav_bar, &charts).into_response())
}

/// Creates the dashboard charts from the per-category totals.
///
/// The chart options are serialized to JSON for ECharts consumption.
fn build_dashboard_charts(category_totals: &HashMap<String, f64>) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "category-share-chart",
            options: category_share_chart(category_totals).to_string(),
        },
        DashboardChart {
            id: "category-totals-chart",
            options: category_totals_chart(category_totals).to_string(),
        },
    ]
}

/// Renders the dashboard page when no transaction data exists.
fn dashboard_no_data_view(nav_bar: NavBar) -> Markup {
    let nav_bar = nav_bar.into_html();
    let transactions_link = link(endpoints::TRANSACTIONS_VIEW, "transactions page");

    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "Charts will show up here once you add some transactions.
                You can add transactions on the " (transactions_link) "."
            }
        }
    );

    base("Dashboard", &[], &content)
}

fn dashboard_view(nav_bar: NavBar<'_>, charts: &[DashboardChart]) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (charts_view(charts))
        }
    );

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
        charts_script(charts),
    ];

    base("Dashboard", &scripts, &content)
}
