//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::ValueEnum;
use evmatch_api::{ExecutionMode, MatchConfig, MatchConfigBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Matching configuration
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Matching-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MatchingConfig {
    /// IoU a match must strictly exceed
    pub iou_threshold: f64,

    /// Label types to evaluate (all observed labels when absent)
    pub event_types: Option<Vec<i32>>,

    /// Display names for the evaluated types
    pub label_names: Option<Vec<String>>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            iou_threshold: evmatch_api::config::defaults::IOU_THRESHOLD,
            event_types: None,
            label_names: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Include per-sample masks in JSON output
    pub include_masks: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            include_masks: false,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    /// Work size (types × samples) above which type passes run in parallel
    pub parallel_threshold: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: evmatch_api::config::defaults::ADAPTIVE_THRESHOLD,
            worker_threads: 0,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Output format named by `[output] default_format`
    pub fn default_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                self.output.default_format
            ))
            .into()
        })
    }

    /// Builder pre-filled with the file's matching and performance settings
    pub fn match_config_builder(&self) -> MatchConfigBuilder {
        let mut builder = MatchConfig::builder()
            .iou_threshold(self.matching.iou_threshold)
            .adaptive_threshold(self.performance.parallel_threshold);

        if let Some(types) = &self.matching.event_types {
            builder = builder.event_types(types.iter().copied());
        }
        if let Some(names) = &self.matching.label_names {
            builder = builder.label_names(names.iter().cloned());
        }
        if self.performance.worker_threads > 0 {
            builder = builder
                .execution_mode(ExecutionMode::Parallel)
                .threads(Some(self.performance.worker_threads));
        }
        builder
    }

    /// Check every setting without running a comparison
    pub fn validate(&self) -> Result<MatchConfig> {
        self.default_format()?;
        let config = self
            .match_config_builder()
            .build()
            .map_err(CliError::from)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.matching.iou_threshold, 0.5);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_tables() {
        let config = CliConfig::from_toml(
            r#"
[matching]
event_types = [0, 3]
label_names = ["fixation", "pursuit"]

[output]
default_format = "markdown"
"#,
        )
        .unwrap();

        assert_eq!(config.matching.event_types, Some(vec![0, 3]));
        assert_eq!(config.matching.iou_threshold, 0.5);
        assert_eq!(config.default_format().unwrap(), OutputFormat::Markdown);

        let match_config = config.validate().unwrap();
        assert_eq!(match_config.event_types(), Some(&[0, 3][..]));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(CliConfig::from_toml("[matching]\niou = 0.5\n").is_err());
        assert!(CliConfig::from_toml("[plotting]\nenabled = true\n").is_err());
    }

    #[test]
    fn test_validate_reports_bad_values() {
        let mut config = CliConfig::default();
        config.matching.iou_threshold = 1.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));

        let mut config = CliConfig::default();
        config.output.default_format = "yaml".into();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: unknown output format 'yaml'"
        );
    }

    #[test]
    fn test_worker_threads_select_parallel() {
        let mut config = CliConfig::default();
        config.performance.worker_threads = 3;
        let match_config = config.validate().unwrap();
        assert_eq!(match_config.executor().mode, ExecutionMode::Parallel);
        assert_eq!(match_config.executor().threads, Some(3));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/evmatch.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
