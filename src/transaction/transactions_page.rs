//! Defines the route handlers for the page that records and lists transactions.
//!
//! The page only renders the entry form and an empty container. The container
//! loads the table from [get_transactions_list] when the page loads and again
//! whenever a create or delete fires [TRANSACTIONS_CHANGED_EVENT], so the
//! table always shows what is in the database.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Database, endpoints,
    endpoints::format_endpoint,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, CATEGORY_BADGE_STYLE, FORM_CONTAINER_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        amount_input, base, date_input, format_currency, text_input, today,
    },
    navigation::NavBar,
    transaction::{Transaction, get_all_transactions},
};

/// The htmx event that tells the transactions page to fetch the table again.
pub const TRANSACTIONS_CHANGED_EVENT: &str = "transactions-changed";

/// Display the page with the transaction form and the transactions table.
pub async fn get_transactions_page() -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();
    let list_trigger = format!("load, {TRANSACTIONS_CHANGED_EVENT} from:body");

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class=(FORM_CONTAINER_STYLE)
            {
                h2 class="text-xl font-bold mb-4" { "Add Transaction" }

                form
                    hx-post=(endpoints::TRANSACTIONS_VIEW)
                    hx-swap="none"
                    hx-target-error="#alert-container"
                    hx-on--after-request="if (event.detail.successful) this.reset()"
                    class="w-full space-y-4 md:space-y-6"
                {
                    (amount_input("amount", "Amount"))
                    (date_input("date", "Date", today()))
                    (text_input("description", "Description", "text", "Description"))
                    (text_input("category", "Category", "text", "e.g. food"))

                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add" }
                }
            }

            section class="w-full max-w-screen-lg mt-8"
            {
                div
                    id="transactions-list"
                    hx-get=(endpoints::TRANSACTIONS_LIST)
                    hx-trigger=(list_trigger)
                    hx-target-error="#alert-container"
                {}
            }
        }
    };

    base("Transactions", &[], &content)
}

/// Render the table of every transaction, for swapping into the transactions page.
pub async fn get_transactions_list(State(database): State<Database>) -> Response {
    let transactions = match database
        .connect()
        .and_then(|connection| get_all_transactions(&connection))
    {
        Ok(transactions) => transactions,
        Err(error) => return error.into_alert_response(),
    };

    transactions_table(&transactions).into_response()
}

fn transactions_table(transactions: &[Transaction]) -> Markup {
    if transactions.is_empty() {
        return html! {
            p class="text-center text-gray-600 dark:text-gray-400"
            {
                "No transactions yet. Add one with the form above."
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
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class="px-6 py-4 text-right" { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { span class="sr-only" { "Actions" } }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        (transaction_row(transaction))
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let delete_url = format_endpoint(endpoints::TRANSACTION_VIEW, transaction.id);

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
        {
            td class=(TABLE_CELL_STYLE) { (transaction.date.as_deref().unwrap_or_default()) }
            td class=(TABLE_CELL_STYLE) { (transaction.description.as_deref().unwrap_or_default()) }
            td class=(TABLE_CELL_STYLE)
            {
                @if let Some(category) = &transaction.category {
                    span class=(CATEGORY_BADGE_STYLE) { (category) }
                }
            }
            td class="px-6 py-4 text-right"
            {
                @if let Some(amount) = transaction.amount {
                    (format_currency(amount))
                }
            }
            td class=(TABLE_CELL_STYLE)
            {
                button
                    hx-delete=(delete_url)
                    hx-swap="none"
                    hx-target-error="#alert-container"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}
