//! Transaction data aggregation for charts.
//!
//! Groups transactions by category and sums their amounts, then formats the
//! totals for chart display.

use std::collections::HashMap;

use crate::transaction::Transaction;

/// The category that transactions without a category are grouped under.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Sums transaction amounts by category in a single pass.
///
/// Categories are discovered from the transactions themselves. Transactions
/// without a category are grouped under [UNCATEGORIZED_LABEL] and a missing
/// amount counts as zero.
///
/// # Returns
/// HashMap mapping each category to the sum of its transaction amounts, in no
/// particular order.
pub fn sum_by_category(transactions: &[Transaction]) -> HashMap<String, f64> {
    let mut totals = HashMap::new();

    for transaction in transactions {
        let category = transaction
            .category
            .as_deref()
            .unwrap_or(UNCATEGORIZED_LABEL);

        *totals.entry(category.to_owned()).or_insert(0.0) += transaction.amount.unwrap_or(0.0);
    }

    totals
}

/// Converts category totals into labels and values sorted by label, so that
/// charts come out the same on every request.
///
/// # Returns
/// Tuple of (category labels, corresponding totals).
pub(super) fn get_sorted_label_and_value_pairs(
    category_totals: &HashMap<String, f64>,
) -> (Vec<String>, Vec<f64>) {
    let mut entries: Vec<_> = category_totals.iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    entries
        .into_iter()
        .map(|(label, value)| (label.clone(), *value))
        .unzip()
}
