//! Label file reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use evmatch_api::parse_labels;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Path that reads from standard input
pub const STDIN_PATH: &str = "-";

/// Reader for label files (one label per line, CSV rows, or JSON arrays)
pub struct FileReader;

impl FileReader {
    /// Whether `path` names standard input
    pub fn is_stdin(path: &Path) -> bool {
        path.as_os_str() == STDIN_PATH
    }

    /// Read a file, or standard input for `-`, as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if Self::is_stdin(path) {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read standard input")?;
            return Ok(content);
        }

        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read and parse a label sequence
    pub fn read_labels(path: &Path) -> Result<Vec<i32>> {
        let text = Self::read_text(path)?;
        let labels = parse_labels(&text)
            .map_err(CliError::from)
            .with_context(|| format!("Failed to parse labels in {}", path.display()))?;

        log::debug!("Read {} labels from {}", labels.len(), path.display());
        Ok(labels)
    }
}
