//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Commented configuration template
const TEMPLATE: &str = r#"# evmatch configuration
#
# Command-line flags override every value in this file.

[matching]
# A prediction event hits a ground-truth event only when their IoU is
# strictly greater than this value. Must lie in (0, 1].
iou_threshold = 0.5

# Label types to evaluate, in report order. Omit to evaluate every label
# present in either sequence.
# event_types = [0, 1, 2, 3]

# Display names for the evaluated types. Without event_types there must be
# one name per observed label. "overall" is reserved.
# label_names = ["fixation", "saccade", "pso", "pursuit"]

[output]
# text, json or markdown
default_format = "text"

# Pretty print JSON output
pretty_json = true

# Add per-sample masks and IoU arrays to JSON output
include_masks = false

[performance]
# Work size (types x samples) above which types are evaluated in parallel
parallel_threshold = 1000000

# Worker threads; 0 picks automatically, any other value forces parallel mode
worker_threads = 0
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to set types, names and threshold");
        println!("2. Validate your configuration:");
        println!("   evmatch validate --config {}", self.output.display());
        println!("3. Use it for comparison:");
        println!(
            "   evmatch compare -g gt.txt -a alg.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}
