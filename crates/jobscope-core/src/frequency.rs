//! Frequency counting and top-N ranking.
//!
//! A [`FrequencyTable`] counts distinct values in first-seen order. Ranking
//! sorts by count descending with a stable sort, so values with equal counts
//! keep their first-seen order.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::records::Cell;

/// One value with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CountEntry {
    /// The counted value.
    pub label: String,
    /// Number of occurrences.
    pub count: usize,
}

impl CountEntry {
    /// Create an entry.
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Mapping from distinct value to its occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<CountEntry>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every value in a sequence.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for value in values {
            table.add(value.as_ref());
        }
        table
    }

    /// Count the non-missing cells of a column.
    pub fn from_cells<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        let mut table = Self::new();
        for value in cells.into_iter().filter_map(Cell::value) {
            table.add(&value);
        }
        table
    }

    /// Record one occurrence of `value`.
    pub fn add(&mut self, value: &str) {
        if let Some(&i) = self.index.get(value) {
            self.entries[i].count += 1;
        } else {
            self.index.insert(value.to_string(), self.entries.len());
            self.entries.push(CountEntry::new(value, 1));
        }
    }

    /// Occurrence count of `value` (zero if never seen).
    pub fn get(&self, value: &str) -> usize {
        self.index.get(value).map_or(0, |&i| self.entries[i].count)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no values were counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &CountEntry> {
        self.entries.iter()
    }

    /// All entries ranked by count descending; ties keep first-seen order.
    pub fn ranked(&self) -> Ranking {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Ranking(entries)
    }

    /// The `n` most frequent entries, ranked descending.
    ///
    /// Returns every entry when fewer than `n` distinct values exist.
    pub fn top(&self, n: usize) -> Ranking {
        let mut ranking = self.ranked();
        ranking.0.truncate(n);
        ranking
    }
}

/// Entries ordered by count descending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct Ranking(Vec<CountEntry>);

impl Ranking {
    /// Ranked entries, highest count first.
    pub fn entries(&self) -> &[CountEntry] {
        &self.0
    }

    /// Consume into the ranked entries.
    pub fn into_entries(self) -> Vec<CountEntry> {
        self.0
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the ranking is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of the ranked counts.
    pub fn total(&self) -> usize {
        self.0.iter().map(|e| e.count).sum()
    }
}
