//! Command-line parsing for the housing regression tool.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! data loading and numeric code.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "hreg", version, about = "House-price OLS regression (normal equation)")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` also applies.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the housing dataset, split, fit, and report held-out metrics.
    Train(TrainArgs),
    /// Predict a value from a saved model JSON.
    Predict(PredictArgs),
    /// Print summary statistics of the training partition.
    Stats(StatsArgs),
    /// Run the full cycle on seeded synthetic data (no network or files needed).
    Demo(DemoArgs),
}

/// Dataset location and split settings shared by `train` and `stats`.
#[derive(Debug, Args, Clone)]
pub struct DataArgs {
    /// Read the housing CSV from this path instead of downloading it.
    ///
    /// Without this flag the URL comes from `HOUSING_CSV_URL` (environment or
    /// `.env`), falling back to the public dataset mirror.
    #[arg(long, value_name = "CSV")]
    pub csv: Option<PathBuf>,

    /// Fraction of rows held out for testing, in (0, 1).
    #[arg(long, default_value_t = 0.2)]
    pub test_fraction: f64,

    /// Seed for the train/test shuffle.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Optional outputs of a training run.
#[derive(Debug, Args, Clone, Default)]
pub struct OutputArgs {
    /// Save the trained model (parameters + metrics) to JSON.
    #[arg(long = "export-model", value_name = "JSON")]
    pub export_model: Option<PathBuf>,

    /// Export test-partition predictions to CSV.
    #[arg(long = "export-predictions", value_name = "CSV")]
    pub export_predictions: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct TrainArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct PredictArgs {
    /// Model JSON produced by `hreg train --export-model`.
    #[arg(long, value_name = "JSON")]
    pub model: PathBuf,

    /// Feature value as NAME=VALUE (repeatable). Housing features that are
    /// omitted take their documented defaults.
    #[arg(short = 'f', long = "feature", value_name = "NAME=VALUE")]
    pub features: Vec<String>,
}

#[derive(Debug, Args, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Debug, Args, Clone)]
pub struct DemoArgs {
    /// Number of synthetic observations.
    #[arg(short = 'n', long, default_value_t = 200)]
    pub samples: usize,

    /// True intercept of the generating plane.
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
    pub intercept: f64,

    /// True coefficients of the generating plane (comma separated).
    #[arg(long, value_delimiter = ',', default_values_t = vec![2.0, -1.0], allow_negative_numbers = true)]
    pub coefficients: Vec<f64>,

    /// Standard deviation of the Gaussian noise.
    #[arg(long, default_value_t = 0.5)]
    pub noise: f64,

    /// Fraction of rows held out for testing, in (0, 1).
    #[arg(long, default_value_t = 0.2)]
    pub test_fraction: f64,

    /// Seed for data generation and the train/test shuffle.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Parse a `NAME=VALUE` pair.
pub fn parse_feature_pair(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("Expected NAME=VALUE, got '{raw}'."))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("Missing feature name in '{raw}'."));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid number in '{raw}'."))?;
    if !value.is_finite() {
        return Err(format!("Non-finite value in '{raw}'."));
    }
    Ok((name.to_string(), value))
}
