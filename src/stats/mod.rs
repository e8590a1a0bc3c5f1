//! Statistics engine
//!
//! Pure functions of (tokens, classification, variance mode):
//!
//! - quantitative data: mean, median, mode, range, variance, standard
//!   deviation and coefficient of variation over the numeric tokens
//! - qualitative data: mode over the raw categories, and a rank-based
//!   median when the data is ordinal
//!
//! Frequency tables list numeric values ascending and categories by
//! descending count (ties in first-seen order).

pub mod descriptive;
pub mod frequency;
pub mod mode;
pub mod ordinal;

pub use frequency::{format_number, FrequencyCounts, NumericKey};

use crate::classifier::numeric_values;
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{
    FrequencyRow, FrequencyTotals, MedianValue, ScaleClassification, SummaryStatistics,
    VarianceMode, UNDEFINED_MEASURE,
};

/// Decimal places for summary measures
pub const SUMMARY_DECIMALS: u32 = 2;

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Fixed-point display of a rounded value, e.g. `format_fixed(7.071, 2)` is "7.07".
///
/// Measures that overflowed (infinite or NaN) display as the undefined marker.
pub fn format_fixed(value: f64, places: u32) -> String {
    if !value.is_finite() {
        return UNDEFINED_MEASURE.to_string();
    }
    format!("{:.*}", places as usize, round_to(value, places))
}

/// Compute the summary measures appropriate to `classification`
pub fn compute_statistics<S: AsRef<str>>(
    tokens: &[S],
    classification: &ScaleClassification,
    variance_mode: VarianceMode,
) -> AnalysisResult<SummaryStatistics> {
    if tokens.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    if classification.is_quantitative() {
        let values = numeric_values(tokens);
        return quantitative_statistics(&values, variance_mode);
    }

    let median = classification
        .ordinal_scale()
        .and_then(|scale| ordinal::ordinal_median(tokens, scale))
        .map(MedianValue::Category);

    Ok(SummaryStatistics {
        mean: None,
        median,
        mode: mode::category_mode(tokens),
        range: None,
        variance: None,
        std_dev: None,
        coef_variation: None,
    })
}

/// Summary measures over already-parsed numeric values
pub fn quantitative_statistics(
    values: &[f64],
    variance_mode: VarianceMode,
) -> AnalysisResult<SummaryStatistics> {
    let mean = descriptive::mean(values).ok_or(AnalysisError::EmptyDataset)?;
    let median = descriptive::median(values).ok_or(AnalysisError::EmptyDataset)?;
    let range = descriptive::range(values).ok_or(AnalysisError::EmptyDataset)?;
    let variance = descriptive::variance(values, mean, variance_mode);
    let std_dev = descriptive::std_dev(variance);

    Ok(SummaryStatistics {
        mean: Some(mean),
        median: Some(MedianValue::Numeric(median)),
        mode: mode::numeric_mode(values),
        range: Some(range),
        variance: Some(variance),
        std_dev: Some(std_dev),
        coef_variation: Some(descriptive::coefficient_of_variation(std_dev, mean)),
    })
}

/// Frequency distribution of the tokens under `classification`
pub fn build_frequency_table<S: AsRef<str>>(
    tokens: &[S],
    classification: &ScaleClassification,
) -> AnalysisResult<Vec<FrequencyRow>> {
    if classification.is_quantitative() {
        let values = numeric_values(tokens);
        if values.is_empty() {
            return Err(AnalysisError::EmptyDataset);
        }
        let counts = FrequencyCounts::from_values(values.into_iter().map(NumericKey::new));
        let entries = counts
            .by_value_asc()
            .into_iter()
            .map(|(k, c)| (format_number(k.value()), c));
        return Ok(frequency::build_rows(entries, counts.total()));
    }

    if tokens.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }
    let counts = FrequencyCounts::from_values(tokens.iter().map(|t| t.as_ref().trim()));
    let entries = counts
        .by_count_desc()
        .into_iter()
        .map(|(k, c)| (k.to_string(), c));
    Ok(frequency::build_rows(entries, counts.total()))
}

/// Totals line for rows built over `n` observations
pub fn frequency_totals(rows: &[FrequencyRow], n: usize) -> FrequencyTotals {
    frequency::totals(rows, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::models::ModeResult;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_overflowing_measures_display_as_undefined() {
        let stats = quantitative_statistics(&[1e308, 1e308], VarianceMode::Sample).unwrap();
        let mean = stats.mean.unwrap();
        assert!(mean.is_infinite());
        assert_eq!(format_fixed(mean, SUMMARY_DECIMALS), UNDEFINED_MEASURE);
        assert_eq!(format_fixed(f64::NAN, 2), UNDEFINED_MEASURE);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(7.0710678, 2), 7.07);
        assert_eq!(round_to(0.0625, 3), 0.063);
        assert_eq!(round_to(-2.345, 1), -2.3);
        assert_eq!(format_fixed(35.355339, 2), "35.36");
        assert_eq!(format_fixed(20.0, 2), "20.00");
    }

    #[test]
    fn test_reference_population_dataset() {
        let data = tokens(&["10", "20", "20", "30"]);
        let class = classify(&data).unwrap();
        let stats = compute_statistics(&data, &class, VarianceMode::Population).unwrap();

        assert_eq!(stats.mean, Some(20.0));
        assert_eq!(stats.median, Some(MedianValue::Numeric(20.0)));
        assert_eq!(
            stats.mode,
            ModeResult::Unimodal {
                value: "20".to_string()
            }
        );
        assert_eq!(stats.range, Some(20.0));
        assert_eq!(stats.variance, Some(50.0));
        assert_eq!(stats.std_dev.map(|v| round_to(v, 2)), Some(7.07));
        assert_eq!(stats.coef_variation.map(|v| round_to(v, 2)), Some(35.36));
    }

    #[test]
    fn test_sample_variance_of_reference_dataset() {
        let data = tokens(&["10", "20", "20", "30"]);
        let class = classify(&data).unwrap();
        let stats = compute_statistics(&data, &class, VarianceMode::Sample).unwrap();
        let variance = stats.variance.unwrap();
        assert!((variance - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_noise_tokens_are_dropped_from_numeric_measures() {
        let mut data: Vec<String> = (1..=19).map(|i| i.to_string()).collect();
        data.push("n/a".to_string());
        let class = classify(&data).unwrap();
        let stats = compute_statistics(&data, &class, VarianceMode::Sample).unwrap();
        assert_eq!(stats.mean, Some(10.0));

        let rows = build_frequency_table(&data, &class).unwrap();
        let total: usize = rows.iter().map(|r| r.absolute_freq).sum();
        assert_eq!(total, 19);
    }

    #[test]
    fn test_zero_mean_has_zero_coefficient_of_variation() {
        let data = tokens(&["-1", "1", "-2", "2"]);
        let class = classify(&data).unwrap();
        let stats = compute_statistics(&data, &class, VarianceMode::Sample).unwrap();
        assert_eq!(stats.mean, Some(0.0));
        assert_eq!(stats.coef_variation, Some(0.0));
    }

    #[test]
    fn test_ordinal_statistics() {
        let data = tokens(&["bajo", "alto", "medio", "bajo"]);
        let class = classify(&data).unwrap();
        let stats = compute_statistics(&data, &class, VarianceMode::Sample).unwrap();
        assert_eq!(stats.median, Some(MedianValue::Category("Medio".to_string())));
        assert_eq!(
            stats.mode,
            ModeResult::Unimodal {
                value: "bajo".to_string()
            }
        );
        assert_eq!(stats.mean, None);
        assert_eq!(stats.range, None);
        assert_eq!(stats.variance, None);
        assert_eq!(stats.std_dev, None);
        assert_eq!(stats.coef_variation, None);
    }

    #[test]
    fn test_nominal_statistics_have_no_median() {
        let data = tokens(&["rojo", "azul", "rojo"]);
        let class = classify(&data).unwrap();
        let stats = compute_statistics(&data, &class, VarianceMode::Sample).unwrap();
        assert_eq!(stats.median, None);
        assert_eq!(
            stats.mode,
            ModeResult::Unimodal {
                value: "rojo".to_string()
            }
        );
    }

    #[test]
    fn test_empty_tokens_fail() {
        let empty: Vec<String> = Vec::new();
        let class = ScaleClassification::QualitativeNominal;
        assert_eq!(
            compute_statistics(&empty, &class, VarianceMode::Sample),
            Err(AnalysisError::EmptyDataset)
        );
        assert_eq!(
            build_frequency_table(&empty, &class),
            Err(AnalysisError::EmptyDataset)
        );
    }

    #[test]
    fn test_quantitative_table_is_ascending() {
        let data = tokens(&["3", "1", "2", "3", "10"]);
        let class = classify(&data).unwrap();
        let rows = build_frequency_table(&data, &class).unwrap();
        let values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["1", "2", "3", "10"]);
        assert_eq!(rows[2].absolute_freq, 2);
        assert_eq!(rows[2].cumulative_absolute_freq, 4);
        assert_eq!(rows[3].cumulative_relative_freq, 1.0);
    }

    #[test]
    fn test_equal_numbers_share_a_row() {
        let data = tokens(&["1", "1.0", "01", "2"]);
        let class = classify(&data).unwrap();
        let rows = build_frequency_table(&data, &class).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].value, "1");
        assert_eq!(rows[0].absolute_freq, 3);
    }

    #[test]
    fn test_qualitative_table_by_descending_count() {
        let data = tokens(&["perro", "gato", "pez", "gato", "pez", "gato"]);
        let class = classify(&data).unwrap();
        let rows = build_frequency_table(&data, &class).unwrap();
        let values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["gato", "pez", "perro"]);
        assert_eq!(rows[0].relative_freq, 0.5);
        assert_eq!(rows[0].percentage, 50.0);
    }

    #[test]
    fn test_table_invariants_hold_for_continuous_data() {
        let data = tokens(&["1.1", "2.2", "2.2", "3.3", "4.4", "4.4", "4.4"]);
        let class = classify(&data).unwrap();
        let rows = build_frequency_table(&data, &class).unwrap();
        let total: usize = rows.iter().map(|r| r.absolute_freq).sum();
        assert_eq!(total, data.len());
        let last = rows.last().unwrap();
        assert!((last.cumulative_relative_freq - 1.0).abs() <= 0.001);

        let totals = frequency_totals(&rows, data.len());
        assert_eq!(totals.absolute, data.len());
        assert_eq!(totals.relative, 1.0);
    }
}
