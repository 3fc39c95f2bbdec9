//! Defines the route handlers for the page that records and lists budgets.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Database,
    budget::{Budget, get_all_budgets},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CATEGORY_BADGE_STYLE, FORM_CONTAINER_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, amount_input, base,
        format_currency, text_input,
    },
    navigation::NavBar,
};

/// The htmx event that tells the budgets page to fetch the table again.
pub const BUDGETS_CHANGED_EVENT: &str = "budgets-changed";

/// Display the page with the budget form and the budgets table.
pub async fn get_budgets_page() -> Markup {
    let nav_bar = NavBar::new(endpoints::BUDGETS_VIEW).into_html();
    let list_trigger = format!("load, {BUDGETS_CHANGED_EVENT} from:body");

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class=(FORM_CONTAINER_STYLE)
            {
                h2 class="text-xl font-bold mb-4" { "Add Budget" }

                form
                    hx-post=(endpoints::BUDGETS_VIEW)
                    hx-swap="none"
                    hx-target-error="#alert-container"
                    hx-on--after-request="if (event.detail.successful) this.reset()"
                    class="w-full space-y-4 md:space-y-6"
                {
                    (text_input("category", "Category", "text", "e.g. food"))
                    (amount_input("amount", "Amount"))
                    (text_input("month", "Month", "month", "2024-01"))

                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add" }
                }
            }

            section class="w-full max-w-screen-md mt-8"
            {
                div
                    id="budgets-list"
                    hx-get=(endpoints::BUDGETS_LIST)
                    hx-trigger=(list_trigger)
                    hx-target-error="#alert-container"
                {}
            }
        }
    };

    base("Budgets", &[], &content)
}

/// Render the table of every budget, for swapping into the budgets page.
pub async fn get_budgets_list(State(database): State<Database>) -> Response {
    match database
        .connect()
        .and_then(|connection| get_all_budgets(&connection))
    {
        Ok(budgets) => budgets_table(&budgets).into_response(),
        Err(error) => error.into_alert_response(),
    }
}

fn budgets_table(budgets: &[Budget]) -> Markup {
    if budgets.is_empty() {
        return html! {
            p class="text-center text-gray-600 dark:text-gray-400"
            {
                "No budgets yet. Add one with the form above."
            }
        };
    }

    html! {
        div class="relative overflow-x-auto shadow-md rounded"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Month" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class="px-6 py-4 text-right" { "Amount" }
                    }
                }

                tbody
                {
                    @for budget in budgets {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) { (budget.month.as_deref().unwrap_or_default()) }
                            td class=(TABLE_CELL_STYLE)
                            {
                                @if let Some(category) = &budget.category {
                                    span class=(CATEGORY_BADGE_STYLE) { (category) }
                                }
                            }
                            td class="px-6 py-4 text-right"
                            {
                                @if let Some(amount) = budget.amount {
                                    (format_currency(amount))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
