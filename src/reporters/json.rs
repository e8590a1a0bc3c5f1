//! JSON reporter
//!
//! Outputs the full Analysis as pretty-printed JSON.
//! The document can be fed back to `scalestat analyze` as a dataset.

use crate::analysis::Analysis;
use anyhow::Result;

/// Render analysis as JSON
pub fn render(analysis: &Analysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_json_dataset;
    use crate::reporters::tests::{test_analysis, test_nominal_analysis};

    #[test]
    fn test_json_render_valid() {
        let json_str = render(&test_analysis()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["classification"]["kind"], "quantitative_discrete");
        assert_eq!(parsed["variance_mode"], "population");
        assert_eq!(parsed["statistics"]["variance"], 50.0);
        assert_eq!(parsed["statistics"]["mode"]["value"], "20");
        assert_eq!(parsed["frequency_table"].as_array().expect("rows").len(), 3);
        assert_eq!(parsed["totals"]["absolute"], 4);
    }

    #[test]
    fn test_json_undefined_measures_are_null() {
        let json_str = render(&test_nominal_analysis()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert!(parsed["statistics"]["mean"].is_null());
        assert!(parsed["statistics"]["median"].is_null());
        assert_eq!(parsed["insight"]["predominant"][0], "rojo");
    }

    #[test]
    fn test_json_report_reloads_as_dataset() {
        let json_str = render(&test_analysis()).expect("render JSON");
        let dataset = parse_json_dataset(&json_str).expect("reload");
        assert_eq!(dataset.text, "10\n20\n20\n30");
        assert_eq!(
            dataset.variance_mode,
            Some(crate::models::VarianceMode::Population)
        );
    }
}
