//! Matching configuration

use crate::error::{ApiError, Result};
use evmatch_core::{ExecutionMode, ExecutorConfig, IouThreshold, Label};
use std::collections::HashSet;

/// Default configuration constants
pub mod defaults {
    /// IoU a match must strictly exceed
    pub const IOU_THRESHOLD: f64 = 0.5;

    /// Report key reserved for the overall result
    pub const OVERALL_KEY: &str = "overall";

    /// Work size (`types × samples`) above which adaptive mode goes parallel
    pub const ADAPTIVE_THRESHOLD: usize = evmatch_core::executor::DEFAULT_ADAPTIVE_THRESHOLD;
}

/// Validated matching configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    pub(crate) iou_threshold: IouThreshold,
    pub(crate) event_types: Option<Vec<Label>>,
    pub(crate) label_names: Option<Vec<String>>,
    pub(crate) executor: ExecutorConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            iou_threshold: IouThreshold::DEFAULT,
            event_types: None,
            label_names: None,
            executor: ExecutorConfig::default(),
        }
    }
}

impl MatchConfig {
    /// Create a configuration builder
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::default()
    }

    /// IoU threshold
    pub fn iou_threshold(&self) -> IouThreshold {
        self.iou_threshold
    }

    /// Explicitly requested label types, if any
    pub fn event_types(&self) -> Option<&[Label]> {
        self.event_types.as_deref()
    }

    /// Display names for the label types, if any
    pub fn label_names(&self) -> Option<&[String]> {
        self.label_names.as_deref()
    }

    /// Executor settings
    pub fn executor(&self) -> &ExecutorConfig {
        &self.executor
    }

    /// Pair every evaluated label with its display name
    ///
    /// `observed` is the sorted union of labels present in the data and is
    /// used when no explicit types were configured. Names supplied without
    /// types must cover exactly the observed labels.
    pub(crate) fn resolve_types(&self, observed: Vec<Label>) -> Result<Vec<(Label, String)>> {
        let labels = self.event_types.clone().unwrap_or(observed);

        let names = match &self.label_names {
            Some(names) if names.len() != labels.len() => {
                return Err(ApiError::Configuration(format!(
                    "{} label names given for {} event types",
                    names.len(),
                    labels.len()
                )));
            }
            Some(names) => names.clone(),
            None => labels.iter().map(Label::to_string).collect(),
        };

        Ok(labels.into_iter().zip(names).collect())
    }
}

/// Fluent builder for [`MatchConfig`]
#[derive(Debug, Clone)]
pub struct MatchConfigBuilder {
    iou_threshold: f64,
    event_types: Option<Vec<Label>>,
    label_names: Option<Vec<String>>,
    executor: ExecutorConfig,
}

impl Default for MatchConfigBuilder {
    fn default() -> Self {
        Self {
            iou_threshold: defaults::IOU_THRESHOLD,
            event_types: None,
            label_names: None,
            executor: ExecutorConfig::default(),
        }
    }
}

impl MatchConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the IoU threshold (validated in `build`)
    pub fn iou_threshold(mut self, threshold: f64) -> Self {
        self.iou_threshold = threshold;
        self
    }

    /// Restrict evaluation to these label types, in this order
    pub fn event_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = Label>,
    {
        self.event_types = Some(types.into_iter().collect());
        self
    }

    /// Display names for the evaluated types
    pub fn label_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.label_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.executor.mode = mode;
        self
    }

    /// Set the thread count for parallel execution
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.executor.threads = threads;
        self
    }

    /// Set the adaptive work threshold
    pub fn adaptive_threshold(mut self, threshold: usize) -> Self {
        self.executor.adaptive_threshold = threshold;
        self
    }

    /// Use single-threaded execution
    pub fn sequential(self) -> Self {
        self.execution_mode(ExecutionMode::Sequential)
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<MatchConfig> {
        let iou_threshold = IouThreshold::new(self.iou_threshold)?;

        if let (Some(types), Some(names)) = (&self.event_types, &self.label_names) {
            if types.len() != names.len() {
                return Err(ApiError::Configuration(format!(
                    "{} label names given for {} event types",
                    names.len(),
                    types.len()
                )));
            }
        }

        if let Some(types) = &self.event_types {
            let mut seen = HashSet::new();
            if let Some(duplicate) = types.iter().find(|t| !seen.insert(**t)) {
                return Err(ApiError::Configuration(format!(
                    "event type {duplicate} listed more than once"
                )));
            }
        }

        if let Some(names) = &self.label_names {
            validate_names(names)?;
        }

        if self.executor.threads == Some(0) {
            return Err(ApiError::Configuration(
                "threads must be greater than 0".into(),
            ));
        }

        Ok(MatchConfig {
            iou_threshold,
            event_types: self.event_types,
            label_names: self.label_names,
            executor: self.executor,
        })
    }
}

fn validate_names(names: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if name == defaults::OVERALL_KEY {
            return Err(ApiError::Configuration(format!(
                "label name '{}' is reserved for the overall result",
                defaults::OVERALL_KEY
            )));
        }
        if !seen.insert(name.as_str()) {
            return Err(ApiError::Configuration(format!(
                "label name '{name}' used more than once"
            )));
        }
    }
    Ok(())
}
