//! User-level configuration for scalestat
//!
//! Loaded from `~/.config/scalestat/config.toml` (or the platform's
//! equivalent config directory). Uses the same schema as the project file.

use super::project_config::{CliDefaults, ScaleDefinition};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub defaults: CliDefaults,

    #[serde(default)]
    pub scales: Vec<ScaleDefinition>,
}

const EXAMPLE_CONFIG: &str = r#"# scalestat user configuration
#
# Project files (scalestat.toml or .scalestatrc.json in the working
# directory) override these values; command-line flags override both.

[defaults]
# Output format: "text", "json", "markdown", "html" or "csv"
# format = "text"

# Variance method: "sample" (n-1) or "population" (N)
# method = "sample"

# Disable ANSI colors in text output
# no_color = false

# Extra ordinal scales, lowest label first. They are tried after the
# built-in scales.
# [[scales]]
# name = "temperature"
# labels = ["frio", "templado", "caliente"]
"#;

impl UserConfig {
    /// Load the user config file, or defaults when it is missing or invalid
    pub fn load() -> Result<Self> {
        match Self::user_config_path() {
            Some(path) => Ok(Self::load_from(&path)),
            None => {
                debug!("No config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load a user config from an explicit path
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let parsed = std::fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|content| toml::from_str::<UserConfig>(&content).map_err(Into::into));
        match parsed {
            Ok(config) => {
                debug!("Loaded user config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("scalestat").join("config.toml"))
    }

    /// Create the user config directory and an example config file.
    ///
    /// An existing file is left untouched.
    pub fn init_user_config() -> Result<PathBuf> {
        let config_path = Self::user_config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::init_at(&config_path)?;
        Ok(config_path)
    }

    fn init_at(config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        if !config_path.exists() {
            std::fs::write(config_path, EXAMPLE_CONFIG)?;
        }
        Ok(())
    }
}
