//! HTML reporter with embedded styles and charts
//!
//! Generates a standalone HTML page that can be viewed in any browser:
//! - overview cards (scale, observations, variance method)
//! - summary measures
//! - bar chart of absolute frequencies (fi) and pie chart of percentages (pi)
//! - frequency table with inline share bars
//!
//! Charts are inline SVG, so the file has no external assets.

use super::summary_lines;
use crate::analysis::Analysis;
use crate::models::FrequencyRow;
use anyhow::Result;
use chrono::Local;
use std::f64::consts::PI;

const BAR_COLOR: &str = "#406868";
const PIE_COLORS: &[&str] = &["#71AABD", "#42921D", "#24CB80", "#1A360D", "#D9A441", "#8C5E9E"];

const BAR_CHART_WIDTH: f64 = 560.0;
const BAR_CHART_HEIGHT: f64 = 280.0;
const PIE_SIZE: f64 = 260.0;

/// Render analysis as standalone HTML
pub fn render(analysis: &Analysis) -> Result<String> {
    let mut html = String::new();

    html.push_str(&render_head(analysis));
    html.push_str("<body>\n<div class=\"container\">\n");
    html.push_str(&render_header(analysis));

    html.push_str("<div class=\"content\">\n");
    html.push_str(&render_overview(analysis));
    html.push_str(&render_measures(analysis));
    html.push_str(&render_charts(&analysis.frequency_table));
    html.push_str(&render_frequency_table(analysis));
    html.push_str(&render_interpretation(analysis));
    html.push_str("</div>\n"); // content

    html.push_str(&render_footer());
    html.push_str("</div>\n</body>\n</html>\n");

    Ok(html)
}

fn render_head(analysis: &Analysis) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>scalestat Report - {}</title>
    <style>
{CSS}
    </style>
</head>
"#,
        html_escape(&analysis.classification.to_string())
    )
}

fn render_header(analysis: &Analysis) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        r#"<div class="header">
    <h1>📊 Descriptive Statistics Report</h1>
    <p class="scale">{}</p>
    <p class="timestamp">Generated {}</p>
</div>
"#,
        html_escape(&analysis.classification.to_string()),
        timestamp
    )
}

fn render_overview(analysis: &Analysis) -> String {
    let method = if analysis.is_quantitative() {
        analysis.variance_mode.label()
    } else {
        "n/a"
    };

    format!(
        r#"<div class="section">
    <h2 class="section-title">📈 Overview</h2>
    <div class="stats-grid">
        <div class="stat-item">
            <div class="stat-value">{}</div>
            <div class="stat-label">Observations</div>
        </div>
        <div class="stat-item">
            <div class="stat-value">{}</div>
            <div class="stat-label">Distinct values</div>
        </div>
        <div class="stat-item">
            <div class="stat-value">{}</div>
            <div class="stat-label">Discarded tokens</div>
        </div>
        <div class="stat-item">
            <div class="stat-value small">{}</div>
            <div class="stat-label">Variance method</div>
        </div>
    </div>
</div>
"#,
        analysis.sample_size,
        analysis.frequency_table.len(),
        analysis.discarded,
        method
    )
}

fn render_measures(analysis: &Analysis) -> String {
    let mut html = String::from(
        r#"<div class="section">
    <h2 class="section-title">🧮 Summary Measures</h2>
    <div class="metrics-grid">
"#,
    );
    for (label, value) in summary_lines(&analysis.statistics) {
        html.push_str(&format!(
            "        <div class=\"metric-card\"><h3>{}</h3><div class=\"metric-value\">{}</div></div>\n",
            label,
            html_escape(&value)
        ));
    }
    html.push_str("    </div>\n</div>\n");
    html
}

fn render_charts(rows: &[FrequencyRow]) -> String {
    format!(
        r#"<div class="section">
    <h2 class="section-title">📊 Charts</h2>
    <div class="charts">
        <figure class="chart">
{}
            <figcaption>Absolute frequency (fi)</figcaption>
        </figure>
        <figure class="chart">
{}
{}
            <figcaption>Percentage (pi)</figcaption>
        </figure>
    </div>
</div>
"#,
        bar_chart_svg(rows),
        pie_chart_svg(rows),
        pie_legend(rows)
    )
}

/// Vertical bars, one per frequency row, scaled to the largest fi
fn bar_chart_svg(rows: &[FrequencyRow]) -> String {
    let (left, right, top, bottom) = (40.0, 10.0, 16.0, 48.0);
    let plot_w = BAR_CHART_WIDTH - left - right;
    let plot_h = BAR_CHART_HEIGHT - top - bottom;
    let max = rows.iter().map(|r| r.absolute_freq).max().unwrap_or(0).max(1) as f64;
    let slot = plot_w / rows.len().max(1) as f64;
    let baseline = top + plot_h;

    let mut svg = format!(
        r#"<svg class="bar-chart" viewBox="0 0 {w} {h}" width="{w}" height="{h}" role="img" aria-label="Bar chart of absolute frequencies">
<line class="axis" x1="{left}" y1="{top}" x2="{left}" y2="{baseline}"/>
<line class="axis" x1="{left}" y1="{baseline}" x2="{end}" y2="{baseline}"/>
<text class="tick" x="{tx}" y="{ty:.2}" text-anchor="end">{max}</text>
<text class="tick" x="{tx}" y="{baseline}" text-anchor="end">0</text>
"#,
        w = BAR_CHART_WIDTH,
        h = BAR_CHART_HEIGHT,
        end = left + plot_w,
        tx = left - 6.0,
        ty = top + 4.0,
        max = max,
    );

    for (i, row) in rows.iter().enumerate() {
        let height = row.absolute_freq as f64 / max * plot_h;
        let x = left + i as f64 * slot + slot * 0.15;
        let label = html_escape(&row.value);
        svg.push_str(&format!(
            "<rect class=\"bar\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"><title>{}: {}</title></rect>\n",
            x,
            baseline - height,
            slot * 0.7,
            height,
            BAR_COLOR,
            label,
            row.absolute_freq
        ));
        svg.push_str(&format!(
            "<text class=\"tick\" x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\">{}</text>\n",
            left + i as f64 * slot + slot / 2.0,
            baseline + 16.0,
            label
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Pie slices sized by pi; starts at 12 o'clock and runs clockwise
fn pie_chart_svg(rows: &[FrequencyRow]) -> String {
    let center = PIE_SIZE / 2.0;
    let radius = center - 10.0;
    let mut svg = format!(
        r#"<svg class="pie-chart" viewBox="0 0 {s} {s}" width="{s}" height="{s}" role="img" aria-label="Pie chart of percentages">
"#,
        s = PIE_SIZE
    );

    // Rounded pi values need not sum to exactly 100
    let total: f64 = rows.iter().map(|r| r.percentage).sum();

    if rows.len() == 1 || total <= 0.0 {
        let label = rows
            .first()
            .map(|r| html_escape(&r.value))
            .unwrap_or_default();
        svg.push_str(&format!(
            "<circle class=\"slice\" cx=\"{c}\" cy=\"{c}\" r=\"{r}\" fill=\"{}\"><title>{}: 100.0%</title></circle>\n",
            PIE_COLORS[0],
            label,
            c = center,
            r = radius
        ));
        svg.push_str("</svg>");
        return svg;
    }

    let point = |angle: f64| {
        (
            center + radius * angle.sin(),
            center - radius * angle.cos(),
        )
    };

    let mut start = 0.0;
    for (i, row) in rows.iter().enumerate() {
        let fraction = row.percentage / total;
        let end = start + fraction * 2.0 * PI;
        let (x1, y1) = point(start);
        let (x2, y2) = point(end);
        let large_arc = u8::from(fraction > 0.5);
        svg.push_str(&format!(
            "<path class=\"slice\" d=\"M {c:.2} {c:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 {} 1 {:.2} {:.2} Z\" fill=\"{}\"><title>{}: {:.1}%</title></path>\n",
            x1,
            y1,
            large_arc,
            x2,
            y2,
            slice_color(i),
            html_escape(&row.value),
            row.percentage,
            c = center,
            r = radius
        ));
        start = end;
    }

    svg.push_str("</svg>");
    svg
}

fn pie_legend(rows: &[FrequencyRow]) -> String {
    let mut html = String::from("<ul class=\"legend\">\n");
    for (i, row) in rows.iter().enumerate() {
        html.push_str(&format!(
            "<li><span class=\"swatch\" style=\"background: {}\"></span>{} ({:.1}%)</li>\n",
            slice_color(i),
            html_escape(&row.value),
            row.percentage
        ));
    }
    html.push_str("</ul>");
    html
}

fn slice_color(index: usize) -> &'static str {
    PIE_COLORS[index % PIE_COLORS.len()]
}

fn render_frequency_table(analysis: &Analysis) -> String {
    let max = analysis
        .frequency_table
        .iter()
        .map(|r| r.absolute_freq)
        .max()
        .unwrap_or(0);

    let mut html = String::from(
        r#"<div class="section">
    <h2 class="section-title">📋 Frequency Table</h2>
    <table class="freq-table">
        <thead><tr><th>Value</th><th>fi</th><th>Fi</th><th>hi</th><th>Hi</th><th>pi (%)</th><th></th></tr></thead>
        <tbody>
"#,
    );
    for row in &analysis.frequency_table {
        html.push_str(&format!(
            "        <tr><td>{}</td><td>{}</td><td>{}</td><td>{:.3}</td><td>{:.3}</td><td>{:.1}</td><td class=\"share\"><div class=\"metric-bar\"><div class=\"metric-bar-fill {}\" style=\"width: {:.1}%\"></div></div></td></tr>\n",
            html_escape(&row.value),
            row.absolute_freq,
            row.cumulative_absolute_freq,
            row.relative_freq,
            row.cumulative_relative_freq,
            row.percentage,
            bar_class(row.absolute_freq, max),
            row.percentage
        ));
    }
    let t = &analysis.totals;
    html.push_str(&format!(
        "        </tbody>\n        <tfoot><tr><th>Total</th><th>{}</th><th></th><th>{:.3}</th><th>{:.3}</th><th>{:.1}</th><th></th></tr></tfoot>\n    </table>\n</div>\n",
        t.absolute, t.relative, t.cumulative_relative, t.percentage
    ));
    html
}

fn render_interpretation(analysis: &Analysis) -> String {
    let mut html = String::from(
        "<div class=\"section\">\n    <h2 class=\"section-title\">💡 Interpretation</h2>\n    <ul class=\"insights\">\n",
    );
    for sentence in analysis.insight.sentences() {
        html.push_str(&format!("        <li>{}</li>\n", html_escape(&sentence)));
    }
    html.push_str("    </ul>\n</div>\n");
    html
}

fn render_footer() -> String {
    format!(
        "<div class=\"footer\">\n    <p>Generated by scalestat {}</p>\n</div>\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Share-bar color: modal rows, rows at least half as frequent, the rest
fn bar_class(count: usize, max: usize) -> &'static str {
    if count == max {
        "bar-mode"
    } else if count * 2 >= max {
        "bar-common"
    } else {
        "bar-rare"
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// Embedded CSS
const CSS: &str = r#"
:root {
    --primary-color: #406868;
    --background-color: #f7f4ea;
    --text-color: #1a360d;
    --card-background: white;
    --border-color: #e2e8f0;
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    color: var(--text-color);
    background: var(--background-color);
    padding: 2rem;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    background: var(--card-background);
    border-radius: 12px;
    box-shadow: 0 4px 6px -1px rgba(0,0,0,0.1);
    overflow: hidden;
}

.header {
    background: linear-gradient(135deg, #406868 0%, #42921d 100%);
    color: white;
    padding: 3rem 2rem;
    text-align: center;
}

.header h1 { font-size: 2.5rem; margin-bottom: 0.5rem; }
.header .scale { font-size: 1.25rem; font-weight: 600; }
.header .timestamp { opacity: 0.9; font-size: 0.95rem; }

.content { padding: 2rem; }

.section { margin-bottom: 2rem; }
.section-title {
    font-size: 1.5rem;
    margin-bottom: 1rem;
    padding-bottom: 0.5rem;
    border-bottom: 2px solid var(--border-color);
}

.metrics-grid, .stats-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 1rem;
}

.metric-card, .stat-item {
    background: var(--card-background);
    border: 1px solid var(--border-color);
    border-radius: 8px;
    padding: 1.5rem;
}

.metric-card h3 {
    font-size: 0.875rem;
    color: #64748b;
    margin-bottom: 0.5rem;
    text-transform: uppercase;
}

.metric-value, .stat-value {
    font-size: 2rem;
    font-weight: bold;
    margin-bottom: 0.5rem;
}

.stat-value.small { font-size: 1.25rem; }
.stat-item { text-align: center; }
.stat-label { font-size: 0.875rem; color: #64748b; }

.charts {
    display: flex;
    flex-wrap: wrap;
    gap: 2rem;
    justify-content: center;
}

.chart { text-align: center; }
.chart figcaption { color: #64748b; font-size: 0.875rem; margin-top: 0.5rem; }
.chart svg { max-width: 100%; height: auto; }
.axis { stroke: rgba(26,54,13,0.4); stroke-width: 1; }
.tick { font-size: 11px; fill: var(--text-color); }
.slice { stroke: #f7f4ea; stroke-width: 2; }

.legend {
    list-style: none;
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem 1rem;
    justify-content: center;
    margin-top: 0.75rem;
    font-size: 0.875rem;
}

.swatch {
    display: inline-block;
    width: 12px;
    height: 12px;
    border-radius: 2px;
    margin-right: 0.35rem;
}

.freq-table { width: 100%; border-collapse: collapse; }
.freq-table th, .freq-table td {
    padding: 0.5rem 0.75rem;
    border-bottom: 1px solid var(--border-color);
    text-align: right;
}
.freq-table th:first-child, .freq-table td:first-child { text-align: left; }
.freq-table tfoot th { border-top: 2px solid var(--border-color); }
.share { width: 25%; }

.metric-bar {
    height: 8px;
    background: #e2e8f0;
    border-radius: 4px;
    overflow: hidden;
}

.metric-bar-fill { height: 100%; border-radius: 4px; }
.bar-mode { background: #406868; }
.bar-common { background: #24cb80; }
.bar-rare { background: #71aabd; }

.insights { padding-left: 1.25rem; }
.insights li { margin-bottom: 0.25rem; }

.footer {
    text-align: center;
    padding: 1.5rem;
    color: #64748b;
    font-size: 0.875rem;
    border-top: 1px solid var(--border-color);
}
"#;
