//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.regions/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::regions::DEFAULT_REGIONS;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RegionsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
    pub initial_query: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListConfig {
    pub regions: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "Select region";

pub const TITLE_ENV: &str = "REGIONS_TITLE";
pub const QUERY_ENV: &str = "REGIONS_QUERY";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub title: String,
    pub regions: Vec<String>,
    pub initial_query: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&RegionsConfig::default(), None, None)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.regions/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".regions").join("config.toml"))
}

/// Load config from `~/.regions/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `RegionsConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<RegionsConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(RegionsConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(RegionsConfig::default());
    }

    load_config_from(&path)
}

/// Parse the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<RegionsConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RegionsConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Regions Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# title = "Select region"           # Or set REGIONS_TITLE env var
# initial_query = ""                # Or set REGIONS_QUERY env var

# [list]
# Replaces the built-in list when non-empty.
# regions = ["Afghanistan", "Albania", "Algeria"]
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_title` and `cli_query` are from CLI flags (None = not specified).
pub fn resolve(
    config: &RegionsConfig,
    cli_title: Option<&str>,
    cli_query: Option<&str>,
) -> ResolvedConfig {
    resolve_with_env(config, cli_title, cli_query, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading env vars through `env` instead of the process
/// environment.
pub fn resolve_with_env(
    config: &RegionsConfig,
    cli_title: Option<&str>,
    cli_query: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Title: CLI → env → config → default
    let title = cli_title
        .map(|s| s.to_string())
        .or_else(|| env(TITLE_ENV))
        .or_else(|| config.general.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    // Initial query: CLI → env → config → empty
    let initial_query = cli_query
        .map(|s| s.to_string())
        .or_else(|| env(QUERY_ENV))
        .or_else(|| config.general.initial_query.clone())
        .unwrap_or_default();

    ResolvedConfig {
        title,
        regions: resolve_regions(config),
        initial_query,
    }
}

/// Configured list (blank names dropped) if any survive, else the built-in list.
fn resolve_regions(config: &RegionsConfig) -> Vec<String> {
    let configured: Vec<String> = config
        .list
        .regions
        .iter()
        .flatten()
        .filter(|name| !name.trim().is_empty())
        .cloned()
        .collect();

    if configured.is_empty() {
        DEFAULT_REGIONS.iter().map(|s| s.to_string()).collect()
    } else {
        info!("Using {} configured regions", configured.len());
        configured
    }
}
