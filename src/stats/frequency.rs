//! Frequency counting and distribution tables
//!
//! Counts are kept in an insertion-ordered map so that ties are always
//! resolved by first appearance, independent of hashing.

use super::round_to;
use crate::models::{FrequencyRow, FrequencyTotals};
use indexmap::IndexMap;
use std::hash::{Hash, Hasher};

/// A finite `f64` usable as a map key.
///
/// `-0.0` is folded into `0.0` so both count as the same value.
#[derive(Debug, Clone, Copy)]
pub struct NumericKey(f64);

impl NumericKey {
    pub fn new(value: f64) -> Self {
        Self(if value == 0.0 { 0.0 } else { value })
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for NumericKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for NumericKey {}

impl Hash for NumericKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// Render a number the way it is shown in tables and mode lists
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// Value -> count association in first-seen order
#[derive(Debug, Clone)]
pub struct FrequencyCounts<K: Eq + Hash> {
    counts: IndexMap<K, usize>,
    total: usize,
}

impl<K: Eq + Hash> FrequencyCounts<K> {
    pub fn from_values<I: IntoIterator<Item = K>>(values: I) -> Self {
        let mut counts: IndexMap<K, usize> = IndexMap::new();
        let mut total = 0;
        for value in values {
            *counts.entry(value).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Number of observations
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct values
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn get(&self, key: &K) -> Option<usize> {
        self.counts.get(key).copied()
    }

    pub fn max_count(&self) -> Option<usize> {
        self.counts.values().copied().max()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(k, c)| (k, *c))
    }

    /// Entries by descending count; ties keep first-seen order
    pub fn by_count_desc(&self) -> Vec<(&K, usize)> {
        let mut entries: Vec<(&K, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl FrequencyCounts<NumericKey> {
    /// Entries by ascending value
    pub fn by_value_asc(&self) -> Vec<(&NumericKey, usize)> {
        let mut entries: Vec<(&NumericKey, usize)> = self.iter().collect();
        entries.sort_by(|a, b| a.0.value().total_cmp(&b.0.value()));
        entries
    }
}

/// Build table rows from (label, count) pairs already in display order.
///
/// Relative frequencies are rounded to 3 decimals and the percentage is
/// derived from the rounded relative frequency, rounded to 1 decimal.
pub fn build_rows<I>(entries: I, n: usize) -> Vec<FrequencyRow>
where
    I: IntoIterator<Item = (String, usize)>,
{
    let n_f = n as f64;
    let mut cumulative = 0;
    entries
        .into_iter()
        .map(|(value, count)| {
            cumulative += count;
            let relative = round_to(count as f64 / n_f, 3);
            FrequencyRow {
                value,
                absolute_freq: count,
                cumulative_absolute_freq: cumulative,
                relative_freq: relative,
                cumulative_relative_freq: round_to(cumulative as f64 / n_f, 3),
                percentage: round_to(relative * 100.0, 1),
            }
        })
        .collect()
}

/// Totals line for a table over `n` observations
pub fn totals(rows: &[FrequencyRow], n: usize) -> FrequencyTotals {
    if rows.is_empty() || n == 0 {
        return FrequencyTotals::default();
    }
    let absolute: usize = rows.iter().map(|r| r.absolute_freq).sum();
    let relative: f64 = rows
        .iter()
        .map(|r| r.absolute_freq as f64 / n as f64)
        .sum();
    let percentage: f64 = rows.iter().map(|r| r.percentage).sum();
    FrequencyTotals {
        absolute,
        relative: round_to(relative, 3),
        cumulative_relative: rows
            .last()
            .map(|r| r.cumulative_relative_freq)
            .unwrap_or_default(),
        percentage: round_to(percentage, 1),
    }
}
