//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::from_file(&self.config).and_then(|config| {
            let match_config = config.validate()?;
            Ok((config, match_config))
        }) {
            Ok((config, match_config)) => {
                println!("✓ Configuration is valid!");
                println!("  IoU threshold: {}", match_config.iou_threshold());
                match match_config.event_types() {
                    Some(types) => println!("  Event types: {types:?}"),
                    None => println!("  Event types: all observed"),
                }
                if let Some(names) = match_config.label_names() {
                    println!("  Label names: {}", names.join(", "));
                }
                println!("  Output format: {}", config.output.default_format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}
