//! Output formatting module for the scissors CLI
//!
//! Reports are rendered either as a colored, human-readable table or as
//! JSON for machine consumption.

use clap::ValueEnum;
use serde::Serialize;
use std::str::FromStr;

mod json;

pub use self::json::JsonOutput;

/// Output format for CLI reports
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format (default)
    #[default]
    Table,
    /// JSON format for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: '{}'", s)),
        }
    }
}

/// Configuration for output rendering
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// The output format to use
    pub format: OutputFormat,
    /// Compact mode (single-line JSON)
    pub compact: bool,
}

impl OutputConfig {
    /// Create a new OutputConfig with the specified format
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            compact: false,
        }
    }

    /// Builder: enable compact mode
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }
}

/// Trait for report types that have a human-readable table rendering.
///
/// JSON rendering comes from `Serialize`.
pub trait TableDisplay: Serialize {
    /// Convert to table format string
    fn to_table(&self) -> String;
}

/// Result wrapper for formatted output with automatic format selection
pub struct Output<T> {
    data: T,
    config: OutputConfig,
}

impl<T: TableDisplay> Output<T> {
    /// Create a new output wrapper with full config
    pub fn with_config(data: T, config: OutputConfig) -> Self {
        Self { data, config }
    }

    /// Get the rendered string without printing
    pub fn render_to_string(&self) -> String {
        match self.config.format {
            OutputFormat::Table => self.data.to_table(),
            OutputFormat::Json => JsonOutput::format(&self.data, &self.config),
        }
    }

    /// Render the output to stdout
    pub fn render(&self) -> anyhow::Result<()> {
        println!("{}", self.render_to_string());
        Ok(())
    }
}
