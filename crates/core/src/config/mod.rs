//! Configuration module for lextags
//!
//! This module provides configuration structures and loading mechanisms.
//! Configuration can be loaded from TOML files and/or environment variables.

pub(crate) mod defaults;
mod loading;


use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use defaults::*;

/// Returns the path to the global configuration file
///
/// The global config is stored at `~/.lextags/config.toml`.
pub fn global_config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| Error::config("Unable to determine home directory".to_string()))?;
    Ok(home_dir.join(".lextags").join("config.toml"))
}

/// Main configuration structure for lextags
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Extension to language mapping
    #[serde(default)]
    pub langmap: LangMapConfig,

    /// Definition tool configuration
    #[serde(default)]
    pub definitions: DefinitionsConfig,

    /// Extraction pipeline configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

/// Configuration for extension to language resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LangMapConfig {
    /// Default mapping string, e.g. `Python:py.,JavaScript:js.`
    #[serde(default)]
    pub mapping: Option<String>,

    /// Store extensions in upper and lower case as well
    #[serde(default = "default_case_insensitive_extensions")]
    pub case_insensitive: bool,
}

impl Default for LangMapConfig {
    fn default() -> Self {
        Self {
            mapping: None,
            case_insensitive: default_case_insensitive_extensions(),
        }
    }
}

/// Configuration for the external definition tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionsConfig {
    /// Run the definition tool at all
    #[serde(default = "default_definitions_enabled")]
    pub enabled: bool,

    /// Executable name or path, looked up on PATH when bare
    #[serde(default = "default_definition_command")]
    pub command: String,

    /// Line the tool prints after the last tag of a file in filter mode
    #[serde(default = "default_filter_terminator")]
    pub terminator: String,
}

impl Default for DefinitionsConfig {
    fn default() -> Self {
        Self {
            enabled: default_definitions_enabled(),
            command: default_definition_command(),
            terminator: default_filter_terminator(),
        }
    }
}

/// Configuration for the extraction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Run the definition and reference sources on separate threads
    #[serde(default = "default_concurrent_sources")]
    pub concurrent_sources: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            concurrent_sources: default_concurrent_sources(),
        }
    }
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.definitions.command.trim().is_empty() {
            return Err(Error::config(
                "definitions.command must not be empty".to_string(),
            ));
        }

        if self.definitions.terminator.is_empty() {
            return Err(Error::config(
                "definitions.terminator must not be empty".to_string(),
            ));
        }
        if self.definitions.terminator.contains('\n') {
            return Err(Error::config(format!(
                "definitions.terminator must be a single line, got {:?}",
                self.definitions.terminator
            )));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, toml_string)
            .map_err(|e| Error::config(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}
