//! Central tendency and dispersion for numeric data
//!
//! All functions take the values as given and never reorder the caller's
//! slice; an empty slice yields `None` where a measure is undefined.

use crate::models::VarianceMode;

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Middle value, or the average of the two middle values for even counts
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 != 0 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Max minus min
pub fn range(values: &[f64]) -> Option<f64> {
    let min = values.iter().copied().reduce(f64::min)?;
    let max = values.iter().copied().reduce(f64::max)?;
    Some(max - min)
}

/// Sum of squared deviations over `n` (population) or `n - 1` (sample).
///
/// Fewer than two values have no dispersion and give 0.
pub fn variance(values: &[f64], mean: f64, mode: VarianceMode) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    let divisor = match mode {
        VarianceMode::Population => n as f64,
        VarianceMode::Sample => (n - 1) as f64,
    };
    sum_sq / divisor
}

pub fn std_dev(variance: f64) -> f64 {
    variance.sqrt()
}

/// Standard deviation as a percentage of the mean; 0 when the mean is 0
pub fn coefficient_of_variation(std_dev: f64, mean: f64) -> f64 {
    if mean != 0.0 {
        (std_dev / mean) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_mean_and_median() {
        assert_eq!(mean(&[10.0, 20.0, 20.0, 30.0]), Some(20.0));
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(mean(&[]), None);
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_median_leaves_input_untouched() {
        let data = [5.0, 1.0, 3.0];
        let _ = median(&data);
        assert_eq!(data, [5.0, 1.0, 3.0]);
    }

    #[test]
    fn test_range() {
        assert_eq!(range(&[4.0, -2.0, 9.5]), Some(11.5));
        assert_eq!(range(&[7.0]), Some(0.0));
        assert_eq!(range(&[]), None);
    }

    #[test]
    fn test_single_value_variance_is_zero() {
        assert_eq!(variance(&[42.0], 42.0, VarianceMode::Sample), 0.0);
        assert_eq!(variance(&[42.0], 42.0, VarianceMode::Population), 0.0);
    }

    #[test]
    fn test_sample_variance_applies_bessel_correction() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&data).unwrap();
        let population = variance(&data, m, VarianceMode::Population);
        let sample = variance(&data, m, VarianceMode::Sample);
        assert!((population - 4.0).abs() < EPS);
        let n = data.len() as f64;
        assert!((sample - population * n / (n - 1.0)).abs() < EPS);
        assert!((std_dev(population) - 2.0).abs() < EPS);
    }

    #[test]
    fn test_coefficient_of_variation_guards_zero_mean() {
        assert_eq!(coefficient_of_variation(3.0, 0.0), 0.0);
        assert!((coefficient_of_variation(5.0, 20.0) - 25.0).abs() < EPS);
    }
}
