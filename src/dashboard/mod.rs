//! Dashboard module
//!
//! Provides an overview page with charts of spending per category.

mod aggregation;
mod charts;
mod handlers;

pub use aggregation::sum_by_category;
pub use handlers::get_dashboard_page;
