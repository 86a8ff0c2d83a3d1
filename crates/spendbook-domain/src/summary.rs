use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregated spending for a selected window: grand total plus
/// per-category subtotals keyed by the exact category label.
///
/// Derived data with no lifecycle of its own; recomputed per request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub total: f64,
    pub per_category: BTreeMap<String, f64>,
}
