//! Measurement-scale classifier
//!
//! Decides whether a token list is quantitative or qualitative and then
//! narrows it down:
//!
//! - quantitative: at least 90% of tokens parse as finite numbers;
//!   discrete when every parsed value is an integer, continuous otherwise
//! - qualitative: ordinal when every distinct normalized value belongs to
//!   one scale of the [`ScaleRegistry`], nominal otherwise
//!
//! Non-numeric tokens inside a quantitative dataset are noise and are
//! dropped, never rejected.

pub mod scales;

pub use scales::ScaleRegistry;

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::ScaleClassification;
use tracing::debug;

/// Minimum share of numeric tokens, in tenths, for quantitative data
pub const QUANTITATIVE_TENTHS: usize = 9;

/// Parse a token as a finite number (the whole trimmed token must parse)
pub fn parse_numeric(token: &str) -> Option<f64> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

pub fn is_numeric(token: &str) -> bool {
    parse_numeric(token).is_some()
}

/// Parse every numeric token, dropping the ones that fail
pub fn numeric_values<S: AsRef<str>>(tokens: &[S]) -> Vec<f64> {
    tokens
        .iter()
        .filter_map(|t| parse_numeric(t.as_ref()))
        .collect()
}

/// Share of tokens that parse as numbers (0 for an empty list)
pub fn numeric_fraction<S: AsRef<str>>(tokens: &[S]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let numeric = tokens.iter().filter(|t| is_numeric(t.as_ref())).count();
    numeric as f64 / tokens.len() as f64
}

/// Whether enough tokens are numeric for the dataset to be quantitative.
///
/// Compared in integer arithmetic so that exactly 90% qualifies.
pub fn is_mostly_numeric<S: AsRef<str>>(tokens: &[S]) -> bool {
    if tokens.is_empty() {
        return false;
    }
    let numeric = tokens.iter().filter(|t| is_numeric(t.as_ref())).count();
    numeric * 10 >= tokens.len() * QUANTITATIVE_TENTHS
}

/// Classify tokens against the built-in scale registry
pub fn classify<S: AsRef<str>>(tokens: &[S]) -> AnalysisResult<ScaleClassification> {
    classify_with(tokens, &ScaleRegistry::builtin())
}

/// Classify tokens against a caller-supplied scale registry
pub fn classify_with<S: AsRef<str>>(
    tokens: &[S],
    registry: &ScaleRegistry,
) -> AnalysisResult<ScaleClassification> {
    if tokens.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    debug!(
        "{} tokens, {:.1}% numeric",
        tokens.len(),
        numeric_fraction(tokens) * 100.0
    );

    if is_mostly_numeric(tokens) {
        let values = numeric_values(tokens);
        let discrete = values.iter().all(|v| v.fract() == 0.0);
        return Ok(if discrete {
            ScaleClassification::QuantitativeDiscrete
        } else {
            ScaleClassification::QuantitativeContinuous
        });
    }

    Ok(match registry.find_match(tokens) {
        Some(scale) => ScaleClassification::QualitativeOrdinal {
            scale: scale.clone(),
        },
        None => ScaleClassification::QualitativeNominal,
    })
}
