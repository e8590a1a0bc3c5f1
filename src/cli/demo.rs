//! Demo command - generate sample datasets

use anyhow::Result;
use console::style;
use scalestat::analysis::{analyze, AnalysisOptions};
use scalestat::config::Config;
use scalestat::demo::{generate, DemoKind};
use scalestat::reporters::{self, OutputFormat};
use std::path::Path;
use std::str::FromStr;

/// Run the demo command
pub fn run(
    kind: Option<&str>,
    seed: Option<u64>,
    analyze_data: bool,
    format: Option<&str>,
) -> Result<()> {
    let kind = kind
        .map(|k| k.parse::<DemoKind>().map_err(anyhow::Error::msg))
        .transpose()?;
    let dataset = generate(kind, seed);

    // Status goes to stderr so `demo | analyze -` works
    eprintln!(
        "{} Generated {} {} values (seed {})",
        style("✓").green(),
        dataset.values.len(),
        style(dataset.kind).cyan(),
        dataset.seed
    );

    if !analyze_data {
        println!("{}", dataset.text());
        return Ok(());
    }

    let config = Config::load(Path::new("."))?;
    let options =
        AnalysisOptions::new(config.variance_mode()?.unwrap_or_default()).with_registry(config.registry());
    let analysis = analyze(&dataset.values, &options)?;
    let format = OutputFormat::from_str(format.or(config.format()).unwrap_or("text"))?;
    let color = !config.no_color() && console::colors_enabled();
    print!(
        "{}",
        reporters::report_with_format(&analysis, format, color)?
    );
    Ok(())
}
