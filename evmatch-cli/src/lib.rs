//! evmatch CLI library
//!
//! This library provides the command-line interface for comparing
//! ground-truth and predicted label sequences event by event.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
