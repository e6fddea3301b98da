//! Configuration loading and management.
//!
//! A [`HarvestConfig`] carries the filter lists and the optional output
//! directory for a run. It can be built programmatically, loaded from TOML,
//! YAML or JSON, or discovered as `textharvest.toml` in the current directory
//! or one of its parents.

use crate::discovery::FilterSet;
use crate::{HarvestError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File-name globs excluded when the caller supplies none.
pub const DEFAULT_FILE_EXCLUDES: &[&str] = &[
    "*.log",
    "*.tmp",
    "*.cache",
    ".DS_Store",
    "*.py",
    ".env",
    "package-lock.json",
    "*.svg",
    "*.ico",
];

/// Directory names pruned when the caller supplies none.
pub const DEFAULT_DIR_EXCLUDES: &[&str] = &["node_modules", "build", "dist", "migrations", "venv", ".git"];

/// Name of the config file picked up by [`HarvestConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "textharvest.toml";

/// Run configuration.
///
/// # Example
///
/// ```rust
/// use textharvest::HarvestConfig;
///
/// let config = HarvestConfig::default();
/// assert!(config.dir_excludes.iter().any(|d| d == "node_modules"));
/// assert!(config.output_dir.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Glob patterns matched against each file's base name
    #[serde(default = "default_file_excludes")]
    pub file_exclude_globs: Vec<String>,

    /// Directory names (exact, case-sensitive) that are never descended into
    #[serde(default = "default_dir_excludes")]
    pub dir_excludes: Vec<String>,

    /// Where the artifact is written (None = the root itself)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_file_excludes() -> Vec<String> {
    DEFAULT_FILE_EXCLUDES.iter().map(|s| s.to_string()).collect()
}

fn default_dir_excludes() -> Vec<String> {
    DEFAULT_DIR_EXCLUDES.iter().map(|s| s.to_string()).collect()
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            file_exclude_globs: default_file_excludes(),
            dir_excludes: default_dir_excludes(),
            output_dir: None,
        }
    }
}

/// Split a comma-separated pattern field into trimmed, non-empty entries.
///
/// ```rust
/// use textharvest::core::config::parse_pattern_list;
///
/// assert_eq!(parse_pattern_list(" *.log, ,build,"), vec!["*.log", "build"]);
/// ```
pub fn parse_pattern_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

impl HarvestConfig {
    pub fn with_file_exclude_globs(mut self, globs: Vec<String>) -> Self {
        self.file_exclude_globs = globs;
        self
    }

    pub fn with_dir_excludes(mut self, dirs: Vec<String>) -> Self {
        self.dir_excludes = dirs;
        self
    }

    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = dir;
        self
    }

    /// Compile the filter lists into a [`FilterSet`].
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::Config` if any glob fails to compile.
    pub fn filter_set(&self) -> Result<FilterSet> {
        FilterSet::new(&self.file_exclude_globs, &self.dir_excludes)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::Config` if the file cannot be read or is invalid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;

        toml::from_str(&content)
            .map_err(|e| HarvestError::config(format!("Invalid TOML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;

        serde_yaml_ng::from_str(&content)
            .map_err(|e| HarvestError::config(format!("Invalid YAML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;

        serde_json::from_str(&content)
            .map_err(|e| HarvestError::config(format!("Invalid JSON in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration, choosing the parser from the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Self::from_toml_file(path),
            "yaml" | "yml" => Self::from_yaml_file(path),
            "json" => Self::from_json_file(path),
            _ => Err(HarvestError::config(format!(
                "Unsupported config file format: {}",
                path.display()
            ))),
        }
    }

    /// Discover `textharvest.toml` in the current directory or its parents.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file found
    pub fn discover() -> Result<Option<Self>> {
        let current = std::env::current_dir().map_err(HarvestError::Io)?;
        Self::discover_from(&current)
    }

    /// Same as [`HarvestConfig::discover`], starting from `start` instead of the
    /// current directory.
    pub fn discover_from(start: &Path) -> Result<Option<Self>> {
        for dir in start.ancestors() {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                tracing::debug!("Using config file {}", candidate.display());
                return Ok(Some(Self::from_toml_file(candidate)?));
            }
        }

        Ok(None)
    }
}

fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| HarvestError::config_with_source(format!("Failed to read config file {}", path.display()), e))
}
