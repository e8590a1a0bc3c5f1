//! Output reporters for scalestat analysis results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown
//! - `html` - Standalone HTML with bar and pie charts
//! - `csv` - Summary and frequency table for spreadsheets

mod csv;
mod html;
mod json;
mod markdown;
mod text;

use crate::analysis::Analysis;
use crate::models::{MedianValue, SummaryStatistics, UNDEFINED_MEASURE};
use crate::stats::{format_fixed, SUMMARY_DECIMALS};
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
    Html,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "html" | "htm" => Ok(OutputFormat::Html),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown, html, csv",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Render an analysis in the specified format
pub fn report(analysis: &Analysis, format: &str, color: bool) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(analysis, fmt, color)
}

/// Render an analysis using an OutputFormat enum.
///
/// `color` only affects text output.
pub fn report_with_format(analysis: &Analysis, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(analysis, color),
        OutputFormat::Json => json::render(analysis),
        OutputFormat::Markdown => markdown::render(analysis),
        OutputFormat::Html => html::render(analysis),
        OutputFormat::Csv => csv::render(analysis),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
        OutputFormat::Csv => "csv",
    }
}

fn format_measure(value: Option<f64>) -> String {
    value
        .map(|v| format_fixed(v, SUMMARY_DECIMALS))
        .unwrap_or_else(|| UNDEFINED_MEASURE.to_string())
}

fn format_median(median: Option<&MedianValue>) -> String {
    match median {
        Some(MedianValue::Numeric(v)) => format_fixed(*v, SUMMARY_DECIMALS),
        Some(MedianValue::Category(label)) => label.clone(),
        None => UNDEFINED_MEASURE.to_string(),
    }
}

/// Label/value pairs of the summary measures, in display order
fn summary_lines(stats: &SummaryStatistics) -> Vec<(&'static str, String)> {
    let cv = stats
        .coef_variation
        .filter(|v| v.is_finite())
        .map(|v| format!("{}%", format_fixed(v, SUMMARY_DECIMALS)))
        .unwrap_or_else(|| UNDEFINED_MEASURE.to_string());

    vec![
        ("Mean", format_measure(stats.mean)),
        ("Median", format_median(stats.median.as_ref())),
        ("Mode", stats.mode.label()),
        ("Range", format_measure(stats.range)),
        ("Variance", format_measure(stats.variance)),
        ("Standard deviation", format_measure(stats.std_dev)),
        ("Coefficient of variation", cv),
    ]
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::analysis::{analyze_text, AnalysisOptions};
    use crate::models::VarianceMode;

    /// Quantitative analysis of 10, 20, 20, 30 (population)
    pub(crate) fn test_analysis() -> Analysis {
        analyze_text("10, 20, 20, 30", &AnalysisOptions::new(VarianceMode::Population))
            .expect("analysis")
    }

    /// Nominal analysis with a predominant category
    pub(crate) fn test_nominal_analysis() -> Analysis {
        analyze_text("rojo, azul, rojo, verde, rojo", &AnalysisOptions::default())
            .expect("analysis")
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!(OutputFormat::from_str("HTML").unwrap(), OutputFormat::Html);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_summary_lines_quantitative() {
        let analysis = test_analysis();
        let lines = summary_lines(&analysis.statistics);
        assert_eq!(lines[0], ("Mean", "20.00".to_string()));
        assert_eq!(lines[1], ("Median", "20.00".to_string()));
        assert_eq!(lines[2], ("Mode", "20".to_string()));
        assert_eq!(lines[4], ("Variance", "50.00".to_string()));
        assert_eq!(lines[5], ("Standard deviation", "7.07".to_string()));
        assert_eq!(lines[6], ("Coefficient of variation", "35.36%".to_string()));
    }

    #[test]
    fn test_summary_lines_qualitative_use_placeholder() {
        let analysis = test_nominal_analysis();
        let lines = summary_lines(&analysis.statistics);
        assert_eq!(lines[0].1, UNDEFINED_MEASURE);
        assert_eq!(lines[1].1, UNDEFINED_MEASURE);
        assert_eq!(lines[2].1, "rojo");
        assert_eq!(lines[6].1, UNDEFINED_MEASURE);
    }

    #[test]
    fn test_report_dispatch() {
        let analysis = test_analysis();
        for format in ["text", "json", "markdown", "html", "csv"] {
            let out = report(&analysis, format, false).unwrap();
            assert!(!out.is_empty());
        }
        assert!(report(&analysis, "pdf", false).is_err());
        assert_eq!(file_extension(OutputFormat::Markdown), "md");
        assert_eq!(file_extension(OutputFormat::Html), "html");
    }

    #[test]
    fn test_overflowing_measures_use_placeholder() {
        let stats =
            crate::stats::quantitative_statistics(&[1e308, 1e308], VarianceMode::Population)
                .unwrap();
        let lines = summary_lines(&stats);
        assert_eq!(lines[0], ("Mean", UNDEFINED_MEASURE.to_string()));
        assert_eq!(lines[6], ("Coefficient of variation", UNDEFINED_MEASURE.to_string()));
        assert!(lines.iter().all(|(_, value)| !value.contains("inf")));
    }
}
