//! Plain-language interpretation of an analysis

use crate::models::{FrequencyRow, SummaryStatistics};
use crate::stats::{format_fixed, SUMMARY_DECIMALS};
use serde::{Deserialize, Serialize};

/// Short automatic reading of the results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Insight {
    Quantitative {
        count: usize,
        mean: f64,
        coef_variation: f64,
        range: f64,
    },
    Qualitative {
        categories: usize,
        /// Predominant category and its percentage, when one stands out
        predominant: Option<(String, f64)>,
    },
}

impl Insight {
    pub fn quantitative(count: usize, stats: &SummaryStatistics) -> Self {
        Insight::Quantitative {
            count,
            mean: stats.mean.unwrap_or_default(),
            coef_variation: stats.coef_variation.unwrap_or_default(),
            range: stats.range.unwrap_or_default(),
        }
    }

    /// Rows must be ordered by descending count.
    ///
    /// A category is predominant only when the first row's count differs
    /// from the last row's.
    pub fn qualitative(rows: &[FrequencyRow]) -> Self {
        let predominant = match (rows.first(), rows.last()) {
            (Some(top), Some(bottom)) if rows.len() > 1 && top.absolute_freq != bottom.absolute_freq => {
                Some((top.value.clone(), top.percentage))
            }
            _ => None,
        };
        Insight::Qualitative {
            categories: rows.len(),
            predominant,
        }
    }

    /// Sentences describing the results
    pub fn sentences(&self) -> Vec<String> {
        match self {
            Insight::Quantitative {
                count,
                mean,
                coef_variation,
                range,
            } => vec![
                format!("{} numeric values were analyzed.", count),
                format!("The mean is {}.", format_fixed(*mean, SUMMARY_DECIMALS)),
                format!(
                    "The coefficient of variation is {}%.",
                    format_fixed(*coef_variation, SUMMARY_DECIMALS)
                ),
                format!(
                    "Values span a range of {} units.",
                    format_fixed(*range, SUMMARY_DECIMALS)
                ),
            ],
            Insight::Qualitative {
                categories,
                predominant,
            } => {
                let mut out = vec![format!("{} different categories were analyzed.", categories)];
                if let Some((value, pct)) = predominant {
                    out.push(format!(
                        "The predominant category is \"{}\" with {:.1}%.",
                        value, pct
                    ));
                }
                out
            }
        }
    }
}

impl std::fmt::Display for Insight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sentences().join(" "))
    }
}
