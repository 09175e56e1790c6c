//! Presentation ordering applied right before data reaches a renderer.
//!
//! Ranking semantics stay in [`crate::frequency`]; this module only adapts
//! a ranking to the layout conventions of specific chart types.

use schemars::JsonSchema;
use serde::Serialize;

use crate::frequency::{CountEntry, Ranking};

/// Reorder a ranking for a horizontal bar chart.
///
/// Horizontal bar renderers draw the first row at the bottom, so entries are
/// returned ascending by count and the largest bar ends up on top.
pub fn horizontal_bar_order(ranking: &Ranking) -> Vec<CountEntry> {
    ranking.entries().iter().rev().cloned().collect()
}

/// A treemap leaf with its share of the treemap root.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct TreemapEntry {
    /// Leaf label.
    pub label: String,
    /// Occurrence count (leaf size).
    pub count: usize,
    /// Fraction of the displayed total, between 0.0 and 1.0.
    pub percent_parent: f64,
}

/// Attach each entry's share of the displayed total for a single-level treemap.
///
/// The root of the treemap is the sum of the displayed leaves, not of every
/// distinct value in the column.
#[allow(clippy::cast_precision_loss)]
pub fn treemap_shares(ranking: &Ranking) -> Vec<TreemapEntry> {
    let total = ranking.total();
    ranking
        .entries()
        .iter()
        .map(|e| TreemapEntry {
            label: e.label.clone(),
            count: e.count,
            percent_parent: if total == 0 {
                0.0
            } else {
                e.count as f64 / total as f64
            },
        })
        .collect()
}
