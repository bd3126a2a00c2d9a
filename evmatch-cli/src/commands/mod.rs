//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod compare;
pub mod generate_config;
pub mod validate;

use crate::output::OutputFormat;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare a ground-truth and a predicted label sequence
    Compare(compare::CompareArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List execution modes
    Modes,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Compare(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        for (name, description) in self.entries() {
            println!("{name:<10} {description}");
        }
    }

    fn entries(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            ListCommands::Formats => OutputFormat::ALL
                .iter()
                .map(|format| (format.name(), format.description()))
                .collect(),
            ListCommands::Modes => vec![
                ("adaptive", "Parallel only when types × samples is large (default)"),
                ("sequential", "Evaluate types one after another"),
                ("parallel", "Evaluate types on a worker pool (--parallel)"),
            ],
        }
    }
}
