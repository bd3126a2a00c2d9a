//! Label sequence sources

use crate::error::{ApiError, Result};
use evmatch_core::Label;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Source of one label sequence
pub enum Input {
    /// Labels already in memory
    Labels(Vec<Label>),
    /// Label text (see [`parse_labels`])
    Text(String),
    /// File containing label text
    File(PathBuf),
    /// Reader producing label text
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Labels(labels) => f.debug_tuple("Labels").field(&labels.len()).finish(),
            Input::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from labels
    pub fn from_labels(labels: impl Into<Vec<Label>>) -> Self {
        Input::Labels(labels.into())
    }

    /// Create input from label text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the label sequence from the input
    pub fn read_labels(self) -> Result<Vec<Label>> {
        match self {
            Input::Labels(labels) => Ok(labels),
            Input::Text(text) => parse_labels(&text),
            Input::File(path) => {
                let text = fs::read_to_string(&path)?;
                parse_labels(&text).map_err(|e| match e {
                    ApiError::Input(msg) => ApiError::Input(format!("{}: {msg}", path.display())),
                    other => other,
                })
            }
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer)?;
                parse_labels(&buffer)
            }
        }
    }
}

impl From<Vec<Label>> for Input {
    fn from(labels: Vec<Label>) -> Self {
        Input::Labels(labels)
    }
}

impl From<&[Label]> for Input {
    fn from(labels: &[Label]) -> Self {
        Input::Labels(labels.to_vec())
    }
}

/// Parse integer labels from text
///
/// Text whose first non-blank character is `[` must be a JSON array of
/// integers. Anything else is delimited text: labels separated by commas,
/// semicolons, or whitespace, so one-per-line files and CSV rows both parse.
/// Text after `#` on a line is ignored in delimited text.
pub fn parse_labels(text: &str) -> Result<Vec<Label>> {
    let labels = if text.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<Label>>(text)
            .map_err(|e| ApiError::Input(format!("invalid JSON label array: {e}")))?
    } else {
        parse_delimited(text)?
    };

    tracing::debug!(labels = labels.len(), "parsed label text");
    Ok(labels)
}

fn parse_delimited(text: &str) -> Result<Vec<Label>> {
    let mut labels = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or_default();
        let tokens = content
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|token| !token.is_empty());

        for token in tokens {
            let label = token.parse::<Label>().map_err(|_| {
                ApiError::Input(format!("line {}: invalid label '{token}'", line_no + 1))
            })?;
            labels.push(label);
        }
    }

    Ok(labels)
}
