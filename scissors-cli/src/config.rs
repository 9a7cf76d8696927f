//! Scissors configuration loading from `.scissorsrc.toml`.
//!
//! Configuration is optional: when no config file exists, the built-in
//! defaults apply. Command-line flags always win over the file.
//!
//! # Example Configuration
//!
//! ```toml
//! [namespaces]
//! shared = "intermediary"
//! distinct = "named"
//!
//! [diff]
//! parallel = true
//!
//! [output]
//! format = "table"
//! color = true
//! compact = false
//! ```

use serde::Deserialize;
use std::path::Path;

use scissors_core::DiffOptions;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".scissorsrc.toml";

/// Root configuration structure loaded from `.scissorsrc.toml`.
///
/// All sections are optional and will use defaults if not specified.
#[derive(Debug, Deserialize, Default)]
pub struct ScissorsConfig {
    /// Namespace labels for the output tree header.
    #[serde(default)]
    pub namespaces: NamespaceConfig,

    /// Diff engine settings.
    #[serde(default)]
    pub diff: DiffConfig,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Namespace labels written to the output tree.
///
/// These only name the header columns; the diff always compares the first
/// two namespaces of its inputs.
#[derive(Debug, Deserialize, Default)]
pub struct NamespaceConfig {
    /// Label of the shared key namespace. Default: `intermediary`.
    #[serde(default)]
    pub shared: Option<String>,

    /// Label of the distinct namespace. Default: `named`.
    #[serde(default)]
    pub distinct: Option<String>,
}

/// Diff engine settings.
#[derive(Debug, Deserialize, Default)]
pub struct DiffConfig {
    /// Diff classes in parallel. Output is identical either way.
    #[serde(default)]
    pub parallel: bool,
}

/// Output formatting preferences.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default report format: `table` or `json`.
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output.
    ///
    /// Defaults to auto-detection when unset.
    #[serde(default)]
    pub color: Option<bool>,

    /// Write trees and JSON reports without pretty-printing.
    #[serde(default)]
    pub compact: bool,
}

impl ScissorsConfig {
    /// Load configuration from `.scissorsrc.toml` in the given directory.
    ///
    /// If the config file doesn't exist or can't be parsed, returns defaults.
    /// Parse errors are logged as warnings but don't cause failures.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE_NAME, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE_NAME, e);
                }
            }
        }
        Self::default()
    }

    /// Build diff options, preferring explicit command-line values.
    pub fn diff_options(
        &self,
        shared: Option<&str>,
        distinct: Option<&str>,
        parallel: bool,
    ) -> DiffOptions {
        let defaults = DiffOptions::default();
        let shared = shared
            .or(self.namespaces.shared.as_deref())
            .unwrap_or(defaults.shared_namespace.as_str());
        let distinct = distinct
            .or(self.namespaces.distinct.as_deref())
            .unwrap_or(defaults.distinct_namespace.as_str());

        DiffOptions::new(shared, distinct).parallel(parallel || self.diff.parallel)
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Check if colored output should be used.
    ///
    /// Returns the configured value, or `None` to use auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }

    /// Whether trees and reports should be written compactly.
    pub fn compact(&self) -> bool {
        self.output.compact
    }
}
