//! Execution strategies for per-type matching passes
//!
//! Each label type is matched independently against the same read-only
//! event tables, so passes can run one after another or side by side.
//! Every executor returns results in the order the labels were requested.

use crate::error::Result;
use crate::matcher::Matcher;
use crate::result::TypeResult;
use crate::types::Label;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Default amount of work (`types × samples`) before adaptive mode goes
/// parallel
pub const DEFAULT_ADAPTIVE_THRESHOLD: usize = 1_000_000;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One type pass after another on the calling thread
    Sequential,
    /// Type passes spread over a rayon pool
    Parallel,
    /// Choose based on the amount of work
    #[default]
    Adaptive,
}

/// Executor configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Execution mode selector
    pub mode: ExecutionMode,
    /// Number of worker threads for parallel execution (None = rayon default)
    pub threads: Option<usize>,
    /// Work size above which adaptive mode runs in parallel
    pub adaptive_threshold: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::Adaptive,
            threads: None,
            adaptive_threshold: DEFAULT_ADAPTIVE_THRESHOLD,
        }
    }
}

impl ExecutorConfig {
    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            mode: ExecutionMode::Sequential,
            ..Self::default()
        }
    }

    /// Parallel configuration with an optional thread count
    pub fn parallel(threads: Option<usize>) -> Self {
        Self {
            mode: ExecutionMode::Parallel,
            threads,
            ..Self::default()
        }
    }
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Match every label in `labels`, returning results in the same order
    fn run(&self, matcher: &Matcher<'_, '_>, labels: &[Label]) -> Result<Vec<TypeResult>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Resolve adaptive mode to a concrete one
pub fn auto_select(type_count: usize, samples: usize, threshold: usize) -> ExecutionMode {
    if type_count < 2 {
        // Nothing to spread
        ExecutionMode::Sequential
    } else if type_count.saturating_mul(samples) < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

/// Match `labels` with the executor selected by `config`
pub fn run_types(
    matcher: &Matcher<'_, '_>,
    labels: &[Label],
    config: &ExecutorConfig,
) -> Result<Vec<TypeResult>> {
    let mode = match config.mode {
        ExecutionMode::Adaptive => {
            auto_select(labels.len(), matcher.pair().len(), config.adaptive_threshold)
        }
        mode => mode,
    };

    tracing::debug!(?mode, types = labels.len(), "running type passes");

    match mode {
        #[cfg(feature = "parallel")]
        ExecutionMode::Parallel => ParallelExecutor::new(config.threads).run(matcher, labels),
        _ => SequentialExecutor.run(matcher, labels),
    }
}
