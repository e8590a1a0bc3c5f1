//! Markdown reporter for GitHub-flavored Markdown output

use super::summary_lines;
use crate::analysis::Analysis;
use anyhow::Result;
use chrono::Local;

/// Render analysis as GitHub-flavored Markdown
pub fn render(analysis: &Analysis) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(analysis));
    md.push('\n');

    md.push_str(&render_summary(analysis));
    md.push('\n');

    md.push_str(&render_measures(analysis));
    md.push('\n');

    md.push_str(&render_frequency_table(analysis));
    md.push('\n');

    md.push_str(&render_interpretation(analysis));
    md.push('\n');

    md.push_str(&render_footer());

    Ok(md)
}

fn render_header(analysis: &Analysis) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"# Descriptive Statistics Report

**Scale: {}**

Generated: {}
"#,
        analysis.classification, timestamp
    )
}

fn render_summary(analysis: &Analysis) -> String {
    let method = if analysis.is_quantitative() {
        analysis.variance_mode.label()
    } else {
        "n/a"
    };

    format!(
        r#"## Summary

| Metric | Value |
|--------|-------|
| **Scale** | {} |
| **Observations** | {} |
| **Discarded tokens** | {} |
| **Variance method** | {} |
"#,
        analysis.classification, analysis.sample_size, analysis.discarded, method
    )
}

fn render_measures(analysis: &Analysis) -> String {
    let mut md = String::from("## Summary Measures\n\n| Measure | Value |\n|---------|-------|\n");
    for (label, value) in summary_lines(&analysis.statistics) {
        md.push_str(&format!("| {} | {} |\n", label, escape_cell(&value)));
    }
    md
}

fn render_frequency_table(analysis: &Analysis) -> String {
    let mut md = String::from(
        "## Frequency Table\n\n| Value | fi | Fi | hi | Hi | pi (%) |\n|-------|---:|---:|---:|---:|-------:|\n",
    );
    for row in &analysis.frequency_table {
        md.push_str(&format!(
            "| {} | {} | {} | {:.3} | {:.3} | {:.1} |\n",
            escape_cell(&row.value),
            row.absolute_freq,
            row.cumulative_absolute_freq,
            row.relative_freq,
            row.cumulative_relative_freq,
            row.percentage
        ));
    }
    let t = &analysis.totals;
    md.push_str(&format!(
        "| **Total** | **{}** | | **{:.3}** | **{:.3}** | **{:.1}** |\n",
        t.absolute, t.relative, t.cumulative_relative, t.percentage
    ));
    md
}

fn render_interpretation(analysis: &Analysis) -> String {
    let mut md = String::from("## Interpretation\n\n");
    for sentence in analysis.insight.sentences() {
        md.push_str(&format!("- {}\n", sentence));
    }
    md
}

fn render_footer() -> String {
    format!(
        "---\n\n*Generated by scalestat {}*\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Escape pipe characters so values don't break table cells
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{test_analysis, test_nominal_analysis};

    #[test]
    fn test_markdown_sections() {
        let md = render(&test_analysis()).unwrap();
        assert!(md.starts_with("# Descriptive Statistics Report"));
        assert!(md.contains("## Summary Measures"));
        assert!(md.contains("| Variance | 50.00 |"));
        assert!(md.contains("| 20 | 2 | 3 | 0.500 | 0.750 | 50.0 |"));
        assert!(md.contains("| **Total** | **4** |"));
        assert!(md.contains("| **Variance method** | Population (N) |"));
    }

    #[test]
    fn test_markdown_qualitative() {
        let md = render(&test_nominal_analysis()).unwrap();
        assert!(md.contains("| **Variance method** | n/a |"));
        assert!(md.contains("| Mean | -- |"));
        assert!(md.contains("- The predominant category is \"rojo\" with 60.0%."));
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
    }
}
