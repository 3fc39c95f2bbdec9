//! Alert messages for reporting the outcome of htmx requests.

use maud::{Markup, html};

/// Alert message types for styling
#[derive(Debug, Clone)]
pub enum AlertType {
    Error,
}

/// An alert message that is swapped into the page's alert container.
pub struct Alert<'a> {
    pub alert_type: AlertType,
    pub message: &'a str,
    pub details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new error alert
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self {
            alert_type: AlertType::Error,
            message,
            details,
        }
    }

    pub fn into_html(self) -> Markup {
        let style = match self.alert_type {
            AlertType::Error => {
                "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                dark:bg-gray-800 dark:text-red-400"
            }
        };

        html! {
            div class=(style) role="alert"
            {
                span class="font-medium" { (self.message) }

                @if !self.details.is_empty()
                {
                    " " (self.details)
                }
            }
        }
    }
}
