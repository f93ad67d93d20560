//! Configuration file support for tode.
//!
//! Provides YAML-based configuration through `tode.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use tode::application::dto::OutputFormat;
use tode::shared::Result;
use tode::visualization::domain::SearchDepth;

pub const CONFIG_FILENAME: &str = "tode.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub search_depth: Option<u8>,
    pub format: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub node_size: Option<f64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, already checked by validation.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|value| value.parse::<OutputFormat>().map_err(anyhow::Error::msg))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref api_url) = config.api_url {
        if api_url.trim().is_empty() {
            bail!(
                "Invalid config: api_url must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default API URL."
            );
        }
    }

    if let Some(depth) = config.search_depth {
        if SearchDepth::new(depth).is_err() {
            bail!(
                "Invalid config: search_depth must be between {} and {} (got {}).",
                SearchDepth::MIN,
                SearchDepth::MAX,
                depth
            );
        }
    }

    if let Err(e) = config.output_format() {
        bail!("Invalid config: {}", e);
    }

    for (field, value) in [
        ("width", config.width),
        ("height", config.height),
        ("node_size", config.node_size),
    ] {
        if let Some(value) = value {
            if !value.is_finite() || value <= 0.0 {
                bail!(
                    "Invalid config: {} must be a positive number (got {}).",
                    field,
                    value
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
