//! Generator configuration.
//!
//! Handles loading, validating, and merging `autosidebar.toml`. Values are
//! layered: stock defaults, then the file in the docs root, then command-line
//! flags.
//!
//! ## Config File Location
//!
//! ```text
//! docs/
//! ├── autosidebar.toml         # Optional, only read from the docs root
//! ├── intro.md
//! └── 02-guides/
//!     ├── _category_.yml
//!     └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! autogen_dir = "."             # Directory to build the sidebar from, relative to docs root
//! number_prefix_parser = true   # Strip `01-` style prefixes and use them as positions
//!
//! [sidebar]
//! collapsible = true            # Categories can be collapsed
//! collapsed = true              # Collapsible categories start collapsed
//!
//! [scan]
//! extensions = ["md", "mdx"]    # Which files are docs
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::defaults::SidebarDefaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "autosidebar.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `autosidebar.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SidebarConfig {
    /// Autogeneration root relative to the docs root. `.` is the whole tree.
    pub autogen_dir: String,
    /// Parse `NN-name` prefixes into positions. `false` keeps names verbatim.
    pub number_prefix_parser: bool,
    /// Defaults for category collapse flags.
    pub sidebar: SidebarDefaults,
    /// Doc discovery settings.
    pub scan: ScanConfig,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            autogen_dir: ".".to_string(),
            number_prefix_parser: true,
            sidebar: SidebarDefaults::default(),
            scan: ScanConfig::default(),
        }
    }
}

impl SidebarConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.autogen_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "autogen_dir must not be empty (use \".\" for the docs root)".into(),
            ));
        }
        if self.autogen_dir.starts_with('/') {
            return Err(ConfigError::Validation(
                "autogen_dir must be relative to the docs root".into(),
            ));
        }
        if self.autogen_dir.split('/').any(|segment| segment == "..") {
            return Err(ConfigError::Validation(
                "autogen_dir must not leave the docs root".into(),
            ));
        }
        if self.scan.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "scan.extensions must not be empty".into(),
            ));
        }
        if let Some(ext) = self.scan.extensions.iter().find(|e| e.starts_with('.') || e.is_empty()) {
            return Err(ConfigError::Validation(format!(
                "scan.extensions entries are bare extensions like \"md\", got {ext:?}"
            )));
        }
        Ok(())
    }
}

/// Doc discovery settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// File extensions (without the dot) treated as docs.
    pub extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["md".to_string(), "mdx".to_string()],
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SidebarConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `autosidebar.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file doesn't exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SidebarConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SidebarConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the docs root, with optional command-line overrides on top.
pub fn load_config(
    root: &Path,
    overrides: Option<toml::Value>,
) -> Result<SidebarConfig, ConfigError> {
    let base = match load_raw_config(root)? {
        Some(file) => merge_toml(stock_defaults_value(), file),
        None => stock_defaults_value(),
    };
    resolve_config(base, overrides)
}

/// Returns a fully-commented stock `autosidebar.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# autosidebar configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the docs root as autosidebar.toml.
# Unknown keys will cause an error.

# Directory the sidebar is generated from, relative to the docs root.
# "." uses every doc; "api" uses docs/api and everything below it.
autogen_dir = "."

# Treat leading numbers like "01-intro.md" or "02-guides/" as positions
# and strip them from ids and labels.
number_prefix_parser = true

# ---------------------------------------------------------------------------
# Category defaults (a _category_ file can override both per folder)
# ---------------------------------------------------------------------------
[sidebar]
# Categories can be expanded and collapsed.
collapsible = true

# Collapsible categories start collapsed.
collapsed = true

# ---------------------------------------------------------------------------
# Doc discovery
# ---------------------------------------------------------------------------
[scan]
# File extensions (without the dot) treated as docs.
extensions = ["md", "mdx"]
"##
}
