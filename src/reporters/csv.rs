//! CSV reporter for spreadsheet export
//!
//! One sheet-shaped document: scale and summary measures as two-column
//! `label,value` records, then the frequency table with its own header row
//! and a TOTAL record. Records have different widths, so the writer runs
//! in flexible mode.

use super::summary_lines;
use crate::analysis::Analysis;
use anyhow::{anyhow, Context, Result};

/// Render analysis as CSV
pub fn render(analysis: &Analysis) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    let method = if analysis.is_quantitative() {
        analysis.variance_mode.label()
    } else {
        "n/a"
    };

    let scale = analysis.classification.to_string();
    let observations = analysis.sample_size.to_string();
    let discarded = analysis.discarded.to_string();
    let data = analysis.data.join(", ");
    wtr.write_record(["Scale", scale.as_str()])?;
    wtr.write_record(["Observations", observations.as_str()])?;
    wtr.write_record(["Discarded tokens", discarded.as_str()])?;
    wtr.write_record(["Variance method", method])?;
    wtr.write_record(["Data", data.as_str()])?;
    for (label, value) in summary_lines(&analysis.statistics) {
        wtr.write_record([label, value.as_str()])?;
    }

    wtr.write_record(["Value", "fi", "Fi", "hi", "Hi", "pi"])?;
    for row in &analysis.frequency_table {
        wtr.write_record([
            row.value.clone(),
            row.absolute_freq.to_string(),
            row.cumulative_absolute_freq.to_string(),
            format!("{:.3}", row.relative_freq),
            format!("{:.3}", row.cumulative_relative_freq),
            format!("{:.1}", row.percentage),
        ])?;
    }
    let t = &analysis.totals;
    wtr.write_record([
        "TOTAL".to_string(),
        t.absolute.to_string(),
        String::new(),
        format!("{:.3}", t.relative),
        format!("{:.3}", t.cumulative_relative),
        format!("{:.1}", t.percentage),
    ])?;

    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV output: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze_text, AnalysisOptions};
    use crate::reporters::tests::{test_analysis, test_nominal_analysis};

    fn records(csv_text: &str) -> Vec<Vec<String>> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(csv_text.as_bytes())
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_csv_summary_and_table() {
        let out = render(&test_analysis()).unwrap();
        let rows = records(&out);
        assert_eq!(rows[0], ["Scale", "Quantitative discrete"]);
        assert_eq!(rows[1], ["Observations", "4"]);
        assert_eq!(rows[3], ["Variance method", "Population (N)"]);
        assert_eq!(rows[4], ["Data", "10, 20, 20, 30"]);
        assert!(rows.contains(&vec!["Variance".to_string(), "50.00".to_string()]));

        let header = rows
            .iter()
            .position(|r| r[0] == "Value")
            .expect("frequency header");
        assert_eq!(rows[header], ["Value", "fi", "Fi", "hi", "Hi", "pi"]);
        assert_eq!(rows[header + 2], ["20", "2", "3", "0.500", "0.750", "50.0"]);
        assert_eq!(rows.last().unwrap(), &["TOTAL", "4", "", "1.000", "1.000", "100.0"]);
    }

    #[test]
    fn test_csv_qualitative_placeholders() {
        let rows = records(&render(&test_nominal_analysis()).unwrap());
        assert!(rows.contains(&vec!["Mean".to_string(), "--".to_string()]));
        assert!(rows.contains(&vec!["Variance method".to_string(), "n/a".to_string()]));
    }

    #[test]
    fn test_csv_quotes_special_characters() {
        let analysis = analyze_text("\"a, b\"\nc", &AnalysisOptions::default()).unwrap();
        let out = render(&analysis).unwrap();
        // Every record parses back with the right width
        for row in records(&out) {
            assert!(row.len() == 2 || row.len() == 6, "unexpected row {:?}", row);
        }
    }
}
