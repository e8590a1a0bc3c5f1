//! Project-level configuration support
//!
//! Loads per-directory configuration from `scalestat.toml` or
//! `.scalestatrc.json` in the working directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # scalestat.toml
//!
//! [defaults]
//! format = "markdown"
//! method = "population"
//! no_color = true
//!
//! [[scales]]
//! name = "temperature"
//! labels = ["frio", "templado", "caliente"]
//! ```

use crate::models::OrderedScale;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// TOML project config file name
pub const PROJECT_TOML: &str = "scalestat.toml";
/// JSON project config file name
pub const PROJECT_JSON: &str = ".scalestatrc.json";

/// Default CLI flags
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CliDefaults {
    /// Default output format (text, json, markdown, html, csv)
    #[serde(default)]
    pub format: Option<String>,

    /// Default variance method (sample, population)
    #[serde(default)]
    pub method: Option<String>,

    /// Disable ANSI colors by default
    #[serde(default)]
    pub no_color: Option<bool>,
}

impl CliDefaults {
    /// Merge another set of defaults into this one (other takes priority)
    pub fn merge(&mut self, other: CliDefaults) {
        if other.format.is_some() {
            self.format = other.format;
        }
        if other.method.is_some() {
            self.method = other.method;
        }
        if other.no_color.is_some() {
            self.no_color = other.no_color;
        }
    }
}

/// A user-defined ordinal scale, labels from lowest to highest
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScaleDefinition {
    pub name: String,
    pub labels: Vec<String>,
}

impl ScaleDefinition {
    pub fn to_scale(&self) -> OrderedScale {
        OrderedScale::new(self.name.clone(), self.labels.iter().cloned())
    }
}

/// Contents of a project config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub defaults: CliDefaults,

    /// Extra ordinal scales, tried after the built-in ones
    #[serde(default)]
    pub scales: Vec<ScaleDefinition>,
}

/// Load project configuration from a directory.
///
/// Searches for `scalestat.toml` first, then `.scalestatrc.json`.
/// Returns default configuration if no usable file is found.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let toml_path = dir.join(PROJECT_TOML);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    let json_path = dir.join(PROJECT_JSON);
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

fn load_json_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = serde_json::from_str(&content)?;
    Ok(config)
}
