//! Change classification and ordering
//!
//! Maps parsed resource changes to display rows: each raw action list is
//! classified into an `ActionCategory`, no-op entries are dropped, and the
//! remaining rows are sorted descending by category label. The sort is
//! stable, so resources sharing a category keep their document order. Note
//! that the grouping is plain lexicographic order over labels ("update" >
//! "replace" > "create"), not a severity ranking.

use super::types::{ActionCategory, DisplayRow, ResourceChange};

/// Classify resource changes into ordered display rows. Pure function of
/// its input; the no-op filter and the sort both happen here so the
/// renderer receives rows in final order.
pub fn classify(changes: &[ResourceChange]) -> Vec<DisplayRow> {
    let mut rows: Vec<DisplayRow> = changes
        .iter()
        .filter_map(|change| {
            let category = ActionCategory::from_actions(&change.change.actions);
            if category == ActionCategory::NoOp {
                return None;
            }
            Some(DisplayRow {
                category,
                address: change.address.clone(),
            })
        })
        .collect();

    rows.sort_by(|a, b| b.category.label().cmp(a.category.label()));
    rows
}
