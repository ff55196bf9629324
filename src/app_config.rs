use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::play::DEFAULT_NORMALIZATION_CEILING;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Interaction graph settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Input discovery settings
    #[serde(default)]
    pub input: InputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// What to do when no two characters ever share a scene
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmptyGraphPolicy {
    // @policy: Fail the run
    #[default]
    Error,
    // @policy: Keep the edgeless graph as is
    Skip,
}

impl std::fmt::Display for EmptyGraphPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

impl std::str::FromStr for EmptyGraphPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "skip" => Ok(Self::Skip),
            _ => Err(anyhow!("Invalid empty graph policy: {}", s)),
        }
    }
}

/// Interaction graph configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GraphConfig {
    /// Weight given to the strongest edge after normalization
    #[serde(default = "default_normalization_ceiling")]
    pub normalization_ceiling: f64,

    /// Behavior on a graph without edges
    #[serde(default)]
    pub empty_graph: EmptyGraphPolicy,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            normalization_ceiling: default_normalization_ceiling(),
            empty_graph: EmptyGraphPolicy::default(),
        }
    }
}

/// Output configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Pretty-print the JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Write the full report instead of the bare graph
    #[serde(default)]
    pub report: bool,

    /// Appended to the transcript file stem to name the output file
    #[serde(default = "default_output_suffix")]
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            report: false,
            suffix: default_output_suffix(),
        }
    }
}

/// Input configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InputConfig {
    /// File extensions treated as transcripts in folder mode
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for log::LevelFilter {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_normalization_ceiling() -> f64 {
    DEFAULT_NORMALIZATION_CEILING
}

fn default_output_suffix() -> String {
    "_out.json".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["html".to_string(), "htm".to_string()]
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let ceiling = self.graph.normalization_ceiling;
        if !ceiling.is_finite() || ceiling <= 0.0 {
            return Err(anyhow!(
                "Normalization ceiling must be a positive number, got {}",
                ceiling
            ));
        }

        if self.output.suffix.trim().is_empty() {
            return Err(anyhow!("Output suffix must not be empty"));
        }

        if self.output.suffix.contains(['/', '\\']) {
            return Err(anyhow!(
                "Output suffix must not contain path separators: {}",
                self.output.suffix
            ));
        }

        if self.input.extensions.is_empty() {
            return Err(anyhow!("At least one input extension is required"));
        }

        Ok(())
    }

    /// Check whether a file extension names a transcript
    pub fn is_transcript_extension(&self, ext: &str) -> bool {
        let ext = ext.trim_start_matches('.');
        self.input
            .extensions
            .iter()
            .any(|known| known.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}
