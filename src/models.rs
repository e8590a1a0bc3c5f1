//! Core data models for scalestat
//!
//! These are the plain structures produced by the classifier and the
//! statistics engine and consumed by reporters and exporters.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Placeholder shown for measures that are undefined for a scale
pub const UNDEFINED_MEASURE: &str = "--";

/// Mode results with more tied values than this are shown as a bare label
pub const MULTIMODAL_DISPLAY_LIMIT: usize = 3;

/// Normalize a category token for scale matching (trimmed, lowercase)
pub fn normalize_label(value: &str) -> String {
    value.trim().to_lowercase()
}

/// An immutable ordered category vocabulary, lowest rank first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedScale {
    pub name: String,
    pub labels: Vec<String>,
}

impl OrderedScale {
    /// Build a scale; labels are normalized the same way dataset tokens are.
    pub fn new<I, S>(name: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            labels: labels
                .into_iter()
                .map(|l| normalize_label(l.as_ref()))
                .collect(),
        }
    }

    /// Whether a normalized value belongs to this scale
    pub fn contains(&self, value: &str) -> bool {
        self.labels.iter().any(|l| l == value)
    }

    /// Position of a normalized value in the scale
    pub fn rank_of(&self, value: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == value)
    }

    pub fn label(&self, rank: usize) -> Option<&str> {
        self.labels.get(rank).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Measurement scale of a dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScaleClassification {
    /// Every numeric value is a mathematical integer
    QuantitativeDiscrete,
    /// Numeric, with at least one non-integer value
    QuantitativeContinuous,
    /// Categories that map onto a known ordered vocabulary
    QualitativeOrdinal { scale: OrderedScale },
    /// Categories with no recognized order
    QualitativeNominal,
}

impl ScaleClassification {
    pub fn is_quantitative(&self) -> bool {
        matches!(
            self,
            ScaleClassification::QuantitativeDiscrete | ScaleClassification::QuantitativeContinuous
        )
    }

    pub fn is_qualitative(&self) -> bool {
        !self.is_quantitative()
    }

    /// The matched ordered scale, for ordinal data only
    pub fn ordinal_scale(&self) -> Option<&OrderedScale> {
        match self {
            ScaleClassification::QualitativeOrdinal { scale } => Some(scale),
            _ => None,
        }
    }

    /// Human-readable name of the scale
    pub fn label(&self) -> &'static str {
        match self {
            ScaleClassification::QuantitativeDiscrete => "Quantitative discrete",
            ScaleClassification::QuantitativeContinuous => "Quantitative continuous",
            ScaleClassification::QualitativeOrdinal { .. } => "Qualitative ordinal",
            ScaleClassification::QualitativeNominal => "Qualitative nominal",
        }
    }
}

impl std::fmt::Display for ScaleClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleClassification::QualitativeOrdinal { scale } => {
                write!(f, "{} ({})", self.label(), scale.name)
            }
            _ => write!(f, "{}", self.label()),
        }
    }
}

/// Divisor used for variance: `n` for a population, `n - 1` for a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VarianceMode {
    #[default]
    Sample,
    Population,
}

impl VarianceMode {
    /// Label including the divisor, e.g. "Sample (n-1)"
    pub fn label(&self) -> &'static str {
        match self {
            VarianceMode::Sample => "Sample (n-1)",
            VarianceMode::Population => "Population (N)",
        }
    }
}

impl FromStr for VarianceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sample" | "muestral" | "s" => Ok(VarianceMode::Sample),
            "population" | "poblacional" | "p" => Ok(VarianceMode::Population),
            _ => Err(format!(
                "Unknown method '{}'. Valid methods: sample, population",
                s
            )),
        }
    }
}

impl std::fmt::Display for VarianceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VarianceMode::Sample => write!(f, "sample"),
            VarianceMode::Population => write!(f, "population"),
        }
    }
}

/// Most frequent value(s) of a dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModeResult {
    /// No repeated value, or every distinct value equally frequent
    Amodal,
    Unimodal { value: String },
    /// Two or more values tied at the highest frequency
    Multimodal { values: Vec<String> },
}

impl ModeResult {
    /// Display form: the value, up to three joined values, or a bare label
    pub fn label(&self) -> String {
        match self {
            ModeResult::Amodal => "Amodal".to_string(),
            ModeResult::Unimodal { value } => value.clone(),
            ModeResult::Multimodal { values } if values.len() > MULTIMODAL_DISPLAY_LIMIT => {
                "Multimodal".to_string()
            }
            ModeResult::Multimodal { values } => values.join(", "),
        }
    }

    pub fn values(&self) -> &[String] {
        match self {
            ModeResult::Amodal => &[],
            ModeResult::Unimodal { value } => std::slice::from_ref(value),
            ModeResult::Multimodal { values } => values,
        }
    }
}

impl std::fmt::Display for ModeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Median of a dataset: a number, or a category label for ordinal data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MedianValue {
    Numeric(f64),
    Category(String),
}

/// Central tendency and dispersion measures.
///
/// Measures that are undefined for the scale are `None` and render as `--`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub mean: Option<f64>,
    pub median: Option<MedianValue>,
    pub mode: ModeResult,
    pub range: Option<f64>,
    pub variance: Option<f64>,
    pub std_dev: Option<f64>,
    /// Percentage, 0 when the mean is exactly zero
    pub coef_variation: Option<f64>,
}

/// One row of a frequency distribution table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRow {
    pub value: String,
    /// fi
    pub absolute_freq: usize,
    /// Fi
    pub cumulative_absolute_freq: usize,
    /// hi, rounded to 3 decimals
    pub relative_freq: f64,
    /// Hi, rounded to 3 decimals
    pub cumulative_relative_freq: f64,
    /// Rounded hi x 100, rounded to 1 decimal
    pub percentage: f64,
}

/// Totals line shown under a frequency table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTotals {
    /// Sum of fi
    pub absolute: usize,
    /// Sum of unrounded fi / n, rounded to 3 decimals
    pub relative: f64,
    /// Hi of the last row
    pub cumulative_relative: f64,
    /// Sum of the rounded row percentages, rounded to 1 decimal
    pub percentage: f64,
}
