//! Configuration module for scalestat
//!
//! This module handles:
//! - User-level configuration (~/.config/scalestat/config.toml)
//! - Project-level configuration (scalestat.toml, .scalestatrc.json)
//! - CLI defaults and custom ordinal scales
//!
//! Precedence is CLI flag > project file > user file > built-in default.
//! The CLI layer applies its flags on top of [`Config`].

mod project_config;
mod user_config;

pub use project_config::{
    load_project_config, CliDefaults, ProjectConfig, ScaleDefinition, PROJECT_JSON, PROJECT_TOML,
};
pub use user_config::UserConfig;

use crate::classifier::ScaleRegistry;
use crate::models::VarianceMode;
use anyhow::{Context, Result};
use std::path::Path;

/// Effective configuration after layering user and project files
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub defaults: CliDefaults,
    /// User scales first, then project scales
    pub scales: Vec<ScaleDefinition>,
}

impl Config {
    /// Load the user config and the project config found in `project_dir`
    pub fn load(project_dir: &Path) -> Result<Self> {
        let user = UserConfig::load()?;
        let project = load_project_config(project_dir);
        Ok(Self::layered(user, project))
    }

    /// Combine both layers; project defaults win over user defaults
    pub fn layered(user: UserConfig, project: ProjectConfig) -> Self {
        let mut defaults = user.defaults;
        defaults.merge(project.defaults);

        let mut scales = user.scales;
        scales.extend(project.scales);

        Self { defaults, scales }
    }

    /// Built-in scales followed by the configured ones
    pub fn registry(&self) -> ScaleRegistry {
        ScaleRegistry::builtin().with_extra(self.scales.iter().map(ScaleDefinition::to_scale))
    }

    /// Configured variance mode, if any
    pub fn variance_mode(&self) -> Result<Option<VarianceMode>> {
        self.defaults
            .method
            .as_deref()
            .map(|m| {
                m.parse::<VarianceMode>()
                    .map_err(anyhow::Error::msg)
                    .context("Invalid `method` in configuration")
            })
            .transpose()
    }

    pub fn format(&self) -> Option<&str> {
        self.defaults.format.as_deref()
    }

    pub fn no_color(&self) -> bool {
        self.defaults.no_color.unwrap_or(false)
    }
}
