//! Parallel execution strategy

use crate::{
    error::{CoreError, Result},
    executor::{ExecutionMode, Executor},
    matcher::Matcher,
    result::TypeResult,
    types::Label,
};
use rayon::prelude::*;

/// Parallel executor running one type pass per rayon task
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelExecutor {
    threads: Option<usize>,
}

impl ParallelExecutor {
    /// Create a new parallel executor
    ///
    /// With `threads` set, passes run on a dedicated pool of that size;
    /// otherwise the global rayon pool is used.
    pub fn new(threads: Option<usize>) -> Self {
        Self { threads }
    }

    fn run_in_pool(matcher: &Matcher<'_, '_>, labels: &[Label]) -> Vec<TypeResult> {
        // Indexed collect keeps the requested label order
        labels
            .par_iter()
            .map(|&label| matcher.match_type(label))
            .collect()
    }
}

impl Executor for ParallelExecutor {
    fn run(&self, matcher: &Matcher<'_, '_>, labels: &[Label]) -> Result<Vec<TypeResult>> {
        match self.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| CoreError::ThreadPool(e.to_string()))?;
                Ok(pool.install(|| Self::run_in_pool(matcher, labels)))
            }
            None => Ok(Self::run_in_pool(matcher, labels)),
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
