//! Mode (most frequent value) computation

use super::frequency::{format_number, FrequencyCounts, NumericKey};
use crate::models::ModeResult;
use std::hash::Hash;

/// Values tied at the highest count, or `None` when the data is amodal.
///
/// Amodal means no value repeats, or the tied set is the whole distinct set.
fn tied_modes<K: Eq + Hash>(counts: &FrequencyCounts<K>) -> Option<Vec<&K>> {
    let max = counts.max_count()?;
    if max <= 1 {
        return None;
    }
    let modes: Vec<&K> = counts
        .iter()
        .filter(|(_, count)| *count == max)
        .map(|(key, _)| key)
        .collect();
    if modes.len() == counts.distinct() {
        return None;
    }
    Some(modes)
}

fn from_labels(mut labels: Vec<String>) -> ModeResult {
    match labels.len() {
        0 => ModeResult::Amodal,
        1 => ModeResult::Unimodal {
            value: labels.remove(0),
        },
        _ => ModeResult::Multimodal { values: labels },
    }
}

/// Mode of numeric data; tied values are listed ascending
pub fn numeric_mode(values: &[f64]) -> ModeResult {
    let counts = FrequencyCounts::from_values(values.iter().copied().map(NumericKey::new));
    let Some(mut modes) = tied_modes(&counts) else {
        return ModeResult::Amodal;
    };
    modes.sort_by(|a, b| a.value().total_cmp(&b.value()));
    from_labels(modes.into_iter().map(|k| format_number(k.value())).collect())
}

/// Mode of raw category strings; tied values keep first-seen order
pub fn category_mode<S: AsRef<str>>(tokens: &[S]) -> ModeResult {
    let counts = FrequencyCounts::from_values(tokens.iter().map(|t| t.as_ref().trim()));
    match tied_modes(&counts) {
        Some(modes) => from_labels(modes.into_iter().map(|k| k.to_string()).collect()),
        None => ModeResult::Amodal,
    }
}
