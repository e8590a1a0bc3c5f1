//! Text (terminal) reporter with colors and formatting

use super::summary_lines;
use crate::analysis::Analysis;
use crate::models::FrequencyRow;
use anyhow::Result;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";

/// ANSI codes, or empty strings when color is off
struct Palette {
    reset: &'static str,
    bold: &'static str,
    dim: &'static str,
    accent: &'static str,
}

impl Palette {
    fn new(color: bool) -> Self {
        if color {
            Self {
                reset: RESET,
                bold: BOLD,
                dim: DIM,
                accent: CYAN,
            }
        } else {
            Self {
                reset: "",
                bold: "",
                dim: "",
                accent: "",
            }
        }
    }
}

/// Render an analysis as formatted terminal output
pub fn render(analysis: &Analysis, color: bool) -> Result<String> {
    let p = Palette::new(color);
    let (reset, bold, dim, accent) = (p.reset, p.bold, p.dim, p.accent);
    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{bold}scalestat analysis{reset}\n"));
    out.push_str(&format!(
        "{dim}──────────────────────────────────────{reset}\n"
    ));
    out.push_str(&format!(
        "Scale: {accent}{bold}{}{reset}\n",
        analysis.classification
    ));
    out.push_str(&format!("Observations: {}", analysis.sample_size));
    if analysis.discarded > 0 {
        out.push_str(&format!(
            "  {dim}({} non-numeric discarded){reset}",
            analysis.discarded
        ));
    }
    out.push('\n');
    if analysis.is_quantitative() {
        out.push_str(&format!("Variance: {}\n", analysis.variance_mode.label()));
    }
    out.push('\n');

    // Summary measures
    out.push_str(&format!("{bold}SUMMARY{reset}\n"));
    let lines = summary_lines(&analysis.statistics);
    let label_width = lines.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    for (label, value) in &lines {
        out.push_str(&format!("  {:<label_width$}  {}\n", label, value));
    }
    out.push('\n');

    // Frequency table
    out.push_str(&format!("{bold}FREQUENCY TABLE{reset}\n"));
    out.push_str(&render_table(&analysis.frequency_table, analysis, &p));
    out.push('\n');

    // Interpretation
    out.push_str(&format!("{bold}INTERPRETATION{reset}\n"));
    for sentence in analysis.insight.sentences() {
        out.push_str(&format!("  {}\n", sentence));
    }

    Ok(out)
}

fn render_table(rows: &[FrequencyRow], analysis: &Analysis, p: &Palette) -> String {
    let (reset, bold, dim) = (p.reset, p.bold, p.dim);
    let value_width = rows
        .iter()
        .map(|r| r.value.chars().count())
        .chain(std::iter::once("Value".len()))
        .max()
        .unwrap_or(0);
    let rule = "─".repeat(value_width + 38);

    let mut out = String::new();
    out.push_str(&format!(
        "{dim}  {:<value_width$}  {:>6}  {:>6}  {:>6}  {:>6}  {:>6}{reset}\n",
        "Value", "fi", "Fi", "hi", "Hi", "pi%"
    ));
    out.push_str(&format!("{dim}  {rule}{reset}\n"));

    for row in rows {
        out.push_str(&format!(
            "  {}  {:>6}  {:>6}  {:>6.3}  {:>6.3}  {:>6.1}\n",
            pad(&row.value, value_width),
            row.absolute_freq,
            row.cumulative_absolute_freq,
            row.relative_freq,
            row.cumulative_relative_freq,
            row.percentage
        ));
    }

    let t = &analysis.totals;
    out.push_str(&format!("{dim}  {rule}{reset}\n"));
    out.push_str(&format!(
        "  {bold}{}{reset}  {:>6}  {:>6}  {:>6.3}  {:>6.3}  {:>6.1}\n",
        pad("TOTAL", value_width),
        t.absolute,
        "",
        t.relative,
        t.cumulative_relative,
        t.percentage
    ));
    out
}

/// Left-align by character count so accented labels line up
fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{}{}", value, " ".repeat(width.saturating_sub(len)))
}
