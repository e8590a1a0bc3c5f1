//! Analyze and classify commands

use super::InputArgs;
use anyhow::{Context, Result};
use console::style;
use scalestat::analysis::{analyze_text, AnalysisOptions};
use scalestat::classifier::classify_with;
use scalestat::config::Config;
use scalestat::input::{load_dataset, Dataset};
use scalestat::models::VarianceMode;
use scalestat::reporters::{self, OutputFormat};
use scalestat::tokenizer::tokenize;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// Read the dataset from --data, a file, or stdin
pub(super) fn read_input(args: &InputArgs) -> Result<Dataset> {
    if let Some(data) = &args.data {
        return Ok(Dataset::from_text(data.clone()));
    }

    match args.input.as_deref() {
        Some(path) if path != Path::new("-") => load_dataset(path)
            .with_context(|| format!("Failed to load dataset from {}", path.display())),
        Some(_) => read_stdin(),
        None if !std::io::stdin().is_terminal() => read_stdin(),
        None => anyhow::bail!(
            "No input given. Pass a dataset file, --data \"1, 2, 3\", or pipe values on stdin (-)."
        ),
    }
}

fn read_stdin() -> Result<Dataset> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read values from stdin")?;
    debug!("Read {} bytes from stdin", text.len());
    Ok(Dataset::from_text(text))
}

/// Pick the variance mode: flag, then dataset document, then config
fn resolve_variance_mode(
    flag: Option<&str>,
    dataset: &Dataset,
    config: &Config,
) -> Result<VarianceMode> {
    if let Some(method) = flag {
        return VarianceMode::from_str(method).map_err(anyhow::Error::msg);
    }
    if let Some(mode) = dataset.variance_mode {
        return Ok(mode);
    }
    Ok(config.variance_mode()?.unwrap_or_default())
}

/// Run the analyze command
pub fn run(
    input: &InputArgs,
    format: Option<&str>,
    output: Option<&Path>,
    method: Option<&str>,
    no_color: bool,
) -> Result<()> {
    let config = Config::load(Path::new("."))?;
    let dataset = read_input(input)?;

    let variance_mode = resolve_variance_mode(method, &dataset, &config)?;
    let options = AnalysisOptions::new(variance_mode).with_registry(config.registry());
    let analysis = analyze_text(&dataset.text, &options)?;

    let format = OutputFormat::from_str(format.or(config.format()).unwrap_or("text"))?;
    let color = output.is_none() && !no_color && !config.no_color() && console::colors_enabled();
    info!("Rendering {} report", format);
    let rendered = reporters::report_with_format(&analysis, format, color)?;

    let output = output.map(|path| output_path(path, format));
    write_output(&rendered, output.as_deref())
}

/// A directory given as `-o` gets `report.<ext>` for the chosen format
fn output_path(path: &Path, format: OutputFormat) -> PathBuf {
    if path.is_dir() {
        path.join(format!("report.{}", reporters::file_extension(format)))
    } else {
        path.to_path_buf()
    }
}

/// Run the classify command
pub fn classify(input: &InputArgs, json: bool) -> Result<()> {
    let config = Config::load(Path::new("."))?;
    let dataset = read_input(input)?;
    let tokens = tokenize(&dataset.text);
    let classification = classify_with(&tokens, &config.registry())?;

    if json {
        let doc = serde_json::json!({
            "tokens": tokens.len(),
            "classification": classification,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{}", classification);
    }
    Ok(())
}

pub(super) fn write_output(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!(
                "{} Report written to {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
