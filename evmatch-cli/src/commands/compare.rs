//! Compare command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{create_formatter, FormatOptions, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use evmatch_api::{EventMatcher, ExecutionMode, MatchConfig, Report};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Arguments for the compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Ground-truth label file ("-" for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub ground_truth: PathBuf,

    /// Predicted label file ("-" for stdin)
    #[arg(short = 'a', long, visible_alias = "alg", value_name = "FILE")]
    pub prediction: PathBuf,

    /// IoU a match must strictly exceed, in (0, 1]
    #[arg(short = 't', long, value_name = "TAU")]
    pub iou_threshold: Option<f64>,

    /// Label types to evaluate, comma separated (default: all observed)
    #[arg(long, value_name = "LABELS", value_delimiter = ',', allow_negative_numbers = true)]
    pub types: Option<Vec<i32>>,

    /// Display names for the evaluated types, comma separated
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub names: Option<Vec<String>>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "EVMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Evaluate types in parallel regardless of input size
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel evaluation
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Include per-sample masks and IoU arrays in JSON output
    #[arg(long)]
    pub masks: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting comparison");
        log::debug!("Arguments: {:?}", self);

        let file_config = CliConfig::load(self.config.as_deref())?;
        let config = self.match_config(&file_config)?;
        let report = self.run(&config)?;

        log::info!(
            "Matched {} types over {} samples, overall F1 {:.4}",
            report.len(),
            report.samples,
            report.f1_score()
        );

        let format = match self.format {
            Some(format) => format,
            None => file_config.default_format()?,
        };
        let options = FormatOptions {
            pretty: file_config.output.pretty_json,
            include_masks: self.masks || file_config.output.include_masks,
        };
        self.write_report(&report, format, options)
    }

    /// Merge the configuration file with command-line overrides
    pub fn match_config(&self, file_config: &CliConfig) -> Result<MatchConfig> {
        let mut builder = file_config.match_config_builder();

        if let Some(threshold) = self.iou_threshold {
            builder = builder.iou_threshold(threshold);
        }
        if let Some(types) = &self.types {
            builder = builder.event_types(types.iter().copied());
        }
        if let Some(names) = &self.names {
            builder = builder.label_names(names.iter().cloned());
        }
        if self.parallel || self.threads.is_some() {
            builder = builder
                .execution_mode(ExecutionMode::Parallel)
                .threads(self.threads);
        }

        let config = builder.build().map_err(CliError::from)?;
        Ok(config)
    }

    fn run(&self, config: &MatchConfig) -> Result<Report> {
        if FileReader::is_stdin(&self.ground_truth) && FileReader::is_stdin(&self.prediction) {
            return Err(CliError::InputError(
                "only one sequence can be read from standard input".to_string(),
            )
            .into());
        }

        let ground_truth = FileReader::read_labels(&self.ground_truth)?;
        let prediction = FileReader::read_labels(&self.prediction)?;

        let report = EventMatcher::with_config(config.clone())
            .process(&ground_truth, &prediction)
            .map_err(CliError::from)?;
        Ok(report)
    }

    fn write_report(&self, report: &Report, format: OutputFormat, options: FormatOptions) -> Result<()> {
        let mut formatter = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                create_formatter(format, BufWriter::new(file), options)
            }
            None => create_formatter(format, io::stdout(), options),
        };

        formatter.format_report(report)?;
        formatter.finish()?;

        if let Some(path) = &self.output {
            if !self.quiet {
                eprintln!("✓ Report written to {}", path.display());
            }
        }
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run from tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
