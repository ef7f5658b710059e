//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and installs the logger
//! - loads the housing CSV (file or URL) or generates synthetic data
//! - runs split + fit + evaluation
//! - prints reports
//! - writes optional exports

use std::collections::HashMap;

use chrono::Utc;
use clap::Parser;
use log::{debug, info};

use crate::cli::{Command, DemoArgs, OutputArgs, PredictArgs, StatsArgs, TrainArgs};
use crate::data::housing::{self, HousingSource, TARGET_SCALE};
use crate::domain::{Dataset, FeatureName};
use crate::error::AppError;
use crate::eval::dataset_stats;
use crate::io::{ModelFile, read_model_json, write_model_json, write_predictions_csv};

use self::pipeline::{TrainConfig, TrainRun};

pub mod pipeline;

/// Entry point for the `hreg` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    crate::logging::init_logging(cli.verbose);

    match cli.command {
        Command::Train(args) => handle_train(args),
        Command::Predict(args) => handle_predict(args),
        Command::Stats(args) => handle_stats(args),
        Command::Demo(args) => handle_demo(args),
    }
}

fn handle_train(args: TrainArgs) -> Result<(), AppError> {
    let source = HousingSource::resolve(args.data.csv.as_deref());
    let loaded = housing::load(&source)?;
    for err in loaded.row_errors.iter().take(5) {
        debug!("skipped line {}: {}", err.line, err.message);
    }
    info!(
        "using {} of {} rows",
        loaded.dataset.len(),
        loaded.rows_read
    );

    let config = TrainConfig {
        test_fraction: args.data.test_fraction,
        seed: args.data.seed,
    };
    let run = pipeline::run_train(&loaded.dataset, &config)?;

    println!(
        "{}",
        crate::report::format_train_report(&run, &loaded.dataset.feature_names, &source.describe())
    );
    write_outputs(&args.output, &run, &loaded.dataset, &config)
}

fn handle_demo(args: DemoArgs) -> Result<(), AppError> {
    let dataset = crate::data::generate_linear(
        args.samples,
        args.intercept,
        &args.coefficients,
        args.noise,
        args.seed,
    )?;
    let config = TrainConfig {
        test_fraction: args.test_fraction,
        seed: args.seed,
    };
    let run = pipeline::run_train(&dataset, &config)?;

    let source = format!(
        "synthetic (n={}, intercept={}, coefficients={:?}, noise={})",
        args.samples, args.intercept, args.coefficients, args.noise
    );
    println!(
        "{}",
        crate::report::format_train_report(&run, &dataset.feature_names, &source)
    );
    write_outputs(&args.output, &run, &dataset, &config)
}

fn handle_stats(args: StatsArgs) -> Result<(), AppError> {
    let source = HousingSource::resolve(args.data.csv.as_deref());
    let loaded = housing::load(&source)?;
    let split = crate::eval::split_seeded(
        &loaded.dataset.features,
        &loaded.dataset.targets,
        args.data.test_fraction,
        args.data.seed,
    )?;

    let train = Dataset {
        feature_names: loaded.dataset.feature_names.clone(),
        features: split.x_train,
        targets: split.y_train,
    };
    let stats = dataset_stats(&train)
        .ok_or_else(|| AppError::new(3, "Training partition is empty."))?;
    println!("{}", crate::report::format_stats(&stats));
    Ok(())
}

fn handle_predict(args: PredictArgs) -> Result<(), AppError> {
    let file = read_model_json(&args.model)?;

    let mut supplied: HashMap<String, f64> = HashMap::new();
    for raw in &args.features {
        let (name, value) =
            crate::cli::parse_feature_pair(raw).map_err(|msg| AppError::new(2, msg))?;
        supplied.insert(name.to_ascii_lowercase(), value);
    }

    let row = build_feature_row(&file.feature_names, &supplied)?;
    let value = file.model().predict_one(&row)?;

    let is_housing = file.feature_names == FeatureName::names();
    println!(
        "{}",
        crate::report::format_prediction(value, is_housing.then_some(TARGET_SCALE))
    );
    Ok(())
}

/// Assemble a feature row in model column order.
///
/// Missing housing features fall back to their catalogue defaults; any other
/// missing feature, or a supplied name the model does not know, is an error.
fn build_feature_row(
    feature_names: &[String],
    supplied: &HashMap<String, f64>,
) -> Result<Vec<f64>, AppError> {
    let known: Vec<String> = feature_names.iter().map(|n| n.to_ascii_lowercase()).collect();
    if let Some(unknown) = supplied.keys().find(|k| !known.contains(k)) {
        return Err(AppError::new(
            2,
            format!(
                "Unknown feature '{unknown}' (model expects: {}).",
                feature_names.join(", ")
            ),
        ));
    }

    feature_names
        .iter()
        .zip(&known)
        .map(|(name, key)| {
            if let Some(v) = supplied.get(key) {
                return Ok(*v);
            }
            name.parse::<FeatureName>()
                .map(FeatureName::default_value)
                .map_err(|_| AppError::new(2, format!("Missing value for feature '{name}'.")))
        })
        .collect()
}

fn write_outputs(
    output: &OutputArgs,
    run: &TrainRun,
    dataset: &Dataset,
    config: &TrainConfig,
) -> Result<(), AppError> {
    if let Some(path) = &output.export_model {
        let file = ModelFile {
            tool: "hreg".to_string(),
            trained_at: Utc::now(),
            feature_names: dataset.feature_names.clone(),
            intercept: run.model.intercept,
            coefficients: run.model.coefficients.clone(),
            metrics: run.metrics,
            train_samples: run.split.train_indices.len(),
            test_samples: run.split.test_indices.len(),
            test_fraction: config.test_fraction,
            seed: config.seed,
        };
        write_model_json(path, &file)?;
        info!("wrote model to {}", path.display());
    }
    if let Some(path) = &output.export_predictions {
        write_predictions_csv(
            path,
            &run.split.test_indices,
            &run.split.y_test,
            &run.predictions,
        )?;
        info!("wrote predictions to {}", path.display());
    }
    Ok(())
}
