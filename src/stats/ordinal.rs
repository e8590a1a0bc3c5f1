//! Median of ordinal categories
//!
//! Categories cannot be averaged, so the median is taken over ranks in the
//! matched scale and always lands on an actual category. For even counts
//! the upper of the two middle ranks is used.

use crate::models::{normalize_label, OrderedScale};

/// Upper-case the first character, keep the rest as is
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Ranks of the tokens in `scale`, ascending; tokens outside it are skipped
pub fn sorted_ranks<S: AsRef<str>>(tokens: &[S], scale: &OrderedScale) -> Vec<usize> {
    let mut ranks: Vec<usize> = tokens
        .iter()
        .filter_map(|t| scale.rank_of(&normalize_label(t.as_ref())))
        .collect();
    ranks.sort_unstable();
    ranks
}

/// Capitalized label of the median rank, `None` if no token is in the scale
pub fn ordinal_median<S: AsRef<str>>(tokens: &[S], scale: &OrderedScale) -> Option<String> {
    let ranks = sorted_ranks(tokens, scale);
    let rank = *ranks.get(ranks.len() / 2)?;
    scale.label(rank).map(capitalize)
}
