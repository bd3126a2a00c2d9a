//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, Executor},
    matcher::Matcher,
    result::TypeResult,
    types::Label,
};

/// Sequential single-threaded executor
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn run(&self, matcher: &Matcher<'_, '_>, labels: &[Label]) -> Result<Vec<TypeResult>> {
        Ok(labels.iter().map(|&label| matcher.match_type(label)).collect())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
