//! Single-pass aggregation of expense records into summary totals.

use spendbook_domain::{Expense, Summary};

/// Sums amounts overall and per category label.
///
/// Category labels group by exact string equality; no case or whitespace
/// normalization is applied. An empty slice yields a zero total and an
/// empty mapping.
pub fn summarize(expenses: &[Expense]) -> Summary {
    let mut summary = Summary::default();
    for expense in expenses {
        summary.total += expense.amount;
        *summary
            .per_category
            .entry(expense.category.clone())
            .or_insert(0.0) += expense.amount;
    }
    summary
}
