//! CLI command definitions and handlers

mod analyze;
mod demo;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use scalestat::config::{Config, UserConfig, PROJECT_JSON, PROJECT_TOML};
use std::path::{Path, PathBuf};

/// scalestat - descriptive statistics by measurement scale
#[derive(Parser, Debug)]
#[command(name = "scalestat")]
#[command(
    version,
    about = "Classify a list of values by measurement scale and compute descriptive statistics",
    long_about = "scalestat decides whether your values are quantitative (discrete or continuous) \
or qualitative (ordinal or nominal), then computes the summary measures that make sense for \
that scale together with a full frequency table.\n\n\
Values can be separated by commas, semicolons or newlines.",
    after_help = "\
Examples:
  scalestat analyze --data \"10, 20, 20, 30\"        Analyze inline values
  scalestat analyze survey.csv --format markdown   Markdown report from a file
  scalestat analyze survey.xlsx -f html -o out/    HTML report with charts
  scalestat analyze data.json --population         Population variance
  scalestat demo --kind ordinal | scalestat analyze -
  scalestat scales                                 List known ordinal scales"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the values come from
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// Dataset file (.txt, .csv, .json, .xlsx, .xls or .ods), or - for stdin
    pub input: Option<PathBuf>,

    /// Values given inline, e.g. "1, 2, 3"
    #[arg(long, short = 'd', conflicts_with = "input")]
    pub data: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a dataset and report summary measures and a frequency table
    #[command(after_help = "\
Examples:
  scalestat analyze --data \"4 8 15 16 23 42\"
  scalestat analyze scores.txt --method population
  scalestat analyze answers.csv --format json -o report.json
  scalestat analyze answers.csv --format csv -o reports/
  cat values.txt | scalestat analyze -")]
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Output format: text, json, markdown (or md), html, csv
        #[arg(long, short = 'f', env = "SCALESTAT_FORMAT", value_parser = ["text", "json", "markdown", "md", "html", "csv"])]
        format: Option<String>,

        /// Output file path, or an existing directory to write report.<ext> into (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Variance method: sample (n-1) or population (N)
        #[arg(long, short = 'm', value_parser = ["sample", "population"])]
        method: Option<String>,

        /// Shorthand for --method population
        #[arg(long, conflicts_with = "method")]
        population: bool,

        /// Disable colors in text output
        #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
        no_color: bool,
    },

    /// Only classify a dataset by measurement scale
    Classify {
        #[command(flatten)]
        input: InputArgs,

        /// Print the classification as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the ordinal scales used for detection, in priority order
    Scales {
        /// Print the scales as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a random demo dataset
    #[command(after_help = "\
Examples:
  scalestat demo                       Random kind of data
  scalestat demo --kind continuous     Continuous measurements
  scalestat demo --seed 42 --analyze   Reproducible data, analyzed right away")]
    Demo {
        /// Kind of data: nominal, ordinal, discrete, continuous
        #[arg(long, short = 'k', value_parser = ["nominal", "ordinal", "discrete", "continuous"])]
        kind: Option<String>,

        /// Seed for reproducible data
        #[arg(long)]
        seed: Option<u64>,

        /// Analyze the generated data instead of printing it
        #[arg(long)]
        analyze: bool,

        /// Report format for --analyze (default: config format, then text)
        #[arg(long, short = 'f', env = "SCALESTAT_FORMAT", value_parser = ["text", "json", "markdown", "md", "html", "csv"])]
        format: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version info
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize user config with example settings
    Init,
    /// Show config paths and effective settings
    Show,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            input,
            format,
            output,
            method,
            population,
            no_color,
        } => {
            let method = if population {
                Some("population".to_string())
            } else {
                method
            };
            analyze::run(
                &input,
                format.as_deref(),
                output.as_deref(),
                method.as_deref(),
                no_color,
            )
        }

        Commands::Classify { input, json } => analyze::classify(&input, json),

        Commands::Scales { json } => run_scales(json),

        Commands::Demo {
            kind,
            seed,
            analyze,
            format,
        } => demo::run(kind.as_deref(), seed, analyze, format.as_deref()),

        Commands::Config { action } => run_config_action(action),

        Commands::Version => {
            println!("scalestat {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn run_scales(json: bool) -> Result<()> {
    let config = Config::load(Path::new("."))?;
    let registry = config.registry();

    if json {
        println!("{}", serde_json::to_string_pretty(registry.scales())?);
        return Ok(());
    }

    println!("\n{} Ordinal scales (first match wins)\n", style("📏").bold());
    for (i, scale) in registry.scales().iter().enumerate() {
        println!(
            "  {:>2}. {:<16} {}",
            i + 1,
            style(&scale.name).cyan(),
            style(scale.labels.join(" < ")).dim()
        );
    }
    println!();
    Ok(())
}

fn run_config_action(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = UserConfig::init_user_config()?;
            println!(
                "{} Config initialized at: {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
            println!("\nEdit it to set default format, variance method and custom scales.");
            Ok(())
        }
        ConfigAction::Show => show_config(),
    }
}

fn show_config() -> Result<()> {
    let config = Config::load(Path::new("."))?;

    println!("📁 Config paths:");
    if let Some(user_path) = UserConfig::user_config_path() {
        println!("  User:    {} {}", user_path.display(), found_marker(&user_path));
    }
    for name in [PROJECT_TOML, PROJECT_JSON] {
        let path = Path::new(".").join(name);
        println!("  Project: ./{} {}", name, found_marker(&path));
    }
    println!();

    println!("⚙️  Effective defaults:");
    println!("  format:   {}", config.format().unwrap_or("text"));
    let method = config.variance_mode()?.unwrap_or_default();
    println!("  method:   {}", method);
    println!("  no_color: {}", config.no_color());
    println!();

    if config.scales.is_empty() {
        println!("📏 Custom scales: none");
    } else {
        println!("📏 Custom scales:");
        for scale in &config.scales {
            println!("  {} ({})", scale.name, scale.labels.join(" < "));
        }
    }
    Ok(())
}

fn found_marker(path: &Path) -> String {
    if path.exists() {
        style("✓").green().to_string()
    } else {
        "(not found)".to_string()
    }
}
