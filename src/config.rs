//! Configuration handling for pagesmith.
//! An optional `pagesmith.json`, `pagesmith.yml` or `pagesmith.yaml` next to the
//! template provides defaults that command-line flags override.

use crate::context::Context;
use crate::engine::{RenderOptions, DEFAULT_MAX_ITERATIONS};
use crate::error::{Error, Result};
use crate::processor::PageSettings;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Supported configuration file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = ["pagesmith.json", "pagesmith.yml", "pagesmith.yaml"];

fn default_base_name() -> String {
    "index".to_string()
}

/// Render settings read from a configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub strict: bool,
    pub max_iterations: usize,
    /// Context name of the collection to paginate
    pub paginate: Option<String>,
    pub page_size: usize,
    pub base_name: String,
    /// Default bindings, overridden by context files and `--set`
    pub context: serde_json::Map<String, serde_json::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: false,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            paginate: None,
            page_size: 0,
            base_name: default_base_name(),
            context: serde_json::Map::new(),
        }
    }
}

impl Config {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions { strict: self.strict, max_iterations: self.max_iterations }
    }

    pub fn page_settings(&self) -> PageSettings {
        PageSettings {
            collection: self.paginate.clone(),
            page_size: self.page_size,
            base_name: self.base_name.clone(),
        }
    }

    /// The inline default bindings as a context.
    pub fn default_context(&self) -> Result<Context> {
        Context::from_json(serde_json::Value::Object(self.context.clone()))
    }
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if neither format parses or the schema does not match
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e))),
    }
}

/// Loads the first configuration file found in `dir`.
///
/// # Returns
/// * `Result<Config>` - Parsed configuration, or defaults when no file exists
pub fn get_config<P: AsRef<Path>>(dir: P) -> Result<Config> {
    for file in CONFIG_FILES {
        let config_path = dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path).map_err(Error::IoError)?;
            return parse_config(&content);
        }
    }

    debug!("No configuration file found (tried: {})", CONFIG_FILES.join(", "));
    Ok(Config::default())
}
