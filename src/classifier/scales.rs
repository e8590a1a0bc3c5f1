//! Registry of known ordered category scales
//!
//! Scales are checked in registry order and the first match wins, so a
//! narrower scale must come before any wider scale that contains it
//! (`malo / regular / bueno` before the 5-point quality scale).

use crate::models::{normalize_label, OrderedScale};
use std::collections::HashSet;
use tracing::debug;

/// Built-in scales in priority order: (name, labels lowest rank first)
const BUILTIN_SCALES: &[(&str, &[&str])] = &[
    ("quality-3", &["malo", "regular", "bueno"]),
    (
        "quality-5",
        &["pesimo", "malo", "regular", "bueno", "excelente"],
    ),
    (
        "satisfaction",
        &[
            "muy insatisfecho",
            "insatisfecho",
            "neutral",
            "satisfecho",
            "muy satisfecho",
        ],
    ),
    (
        "agreement",
        &[
            "totalmente en desacuerdo",
            "en desacuerdo",
            "neutral",
            "de acuerdo",
            "totalmente de acuerdo",
        ],
    ),
    ("level", &["bajo", "medio", "alto"]),
    (
        "frequency",
        &["nunca", "rara vez", "a veces", "frecuentemente", "siempre"],
    ),
    ("clothing-size", &["xs", "s", "m", "l", "xl", "xxl"]),
    (
        "education",
        &[
            "primaria",
            "secundaria",
            "tecnico",
            "pregrado",
            "posgrado",
            "doctorado",
        ],
    ),
];

/// Ordered list of scales consulted for ordinal detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleRegistry {
    scales: Vec<OrderedScale>,
}

impl Default for ScaleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ScaleRegistry {
    /// The eight built-in scales
    pub fn builtin() -> Self {
        Self {
            scales: BUILTIN_SCALES
                .iter()
                .map(|(name, labels)| OrderedScale::new(*name, labels.iter()))
                .collect(),
        }
    }

    /// Append extra scales after the existing ones (lower priority).
    ///
    /// Empty scales are skipped since they can never match.
    pub fn with_extra<I>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = OrderedScale>,
    {
        self.scales
            .extend(extra.into_iter().filter(|s| !s.is_empty()));
        self
    }

    pub fn scales(&self) -> &[OrderedScale] {
        &self.scales
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Find the first scale containing every distinct normalized value.
    ///
    /// A dataset with fewer than two distinct values never matches.
    pub fn find_match<S: AsRef<str>>(&self, tokens: &[S]) -> Option<&OrderedScale> {
        let mut distinct: Vec<String> = Vec::new();
        let mut seen = HashSet::new();
        for token in tokens {
            let value = normalize_label(token.as_ref());
            if seen.insert(value.clone()) {
                distinct.push(value);
            }
        }

        if distinct.len() <= 1 {
            return None;
        }

        let found = self
            .scales
            .iter()
            .find(|scale| distinct.iter().all(|v| scale.contains(v)));
        if let Some(scale) = found {
            debug!("Matched ordinal scale '{}'", scale.name);
        }
        found
    }
}
