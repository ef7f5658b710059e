//! Read/write model JSON files.
//!
//! Model JSON is the portable representation of a trained model:
//! - feature names + intercept + coefficients
//! - the held-out metrics and split settings it was evaluated with
//!
//! A saved model can be reloaded by `hreg predict` without retraining.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Metrics;
use crate::error::AppError;
use crate::models::TrainedModel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelFile {
    pub tool: String,
    pub trained_at: DateTime<Utc>,
    pub feature_names: Vec<String>,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    /// Metrics on the test partition; absent when the test partition was empty.
    pub metrics: Option<Metrics>,
    pub train_samples: usize,
    pub test_samples: usize,
    pub test_fraction: f64,
    pub seed: u64,
}

impl ModelFile {
    pub fn model(&self) -> TrainedModel {
        TrainedModel {
            intercept: self.intercept,
            coefficients: self.coefficients.clone(),
        }
    }
}

pub fn write_model_json(path: &Path, file: &ModelFile) -> Result<(), AppError> {
    let out = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create model JSON '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(out, file)
        .map_err(|e| AppError::new(2, format!("Failed to write model JSON: {e}")))?;
    Ok(())
}

pub fn read_model_json(path: &Path) -> Result<ModelFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open model JSON '{}': {e}", path.display()))
    })?;
    let model: ModelFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid model JSON: {e}")))?;

    if model.coefficients.len() != model.feature_names.len() {
        return Err(AppError::new(
            2,
            format!(
                "Invalid model JSON: {} coefficients for {} features.",
                model.coefficients.len(),
                model.feature_names.len()
            ),
        ));
    }
    if !(model.intercept.is_finite() && model.coefficients.iter().all(|c| c.is_finite())) {
        return Err(AppError::new(2, "Invalid model JSON: non-finite parameters."));
    }
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ModelFile {
        ModelFile {
            tool: "hreg".to_string(),
            trained_at: Utc::now(),
            feature_names: vec!["a".into(), "b".into()],
            intercept: 0.5,
            coefficients: vec![1.5, -2.0],
            metrics: Some(Metrics {
                mse: 0.25,
                rmse: 0.5,
                mae: 0.4,
                r2: 0.9,
            }),
            train_samples: 80,
            test_samples: 20,
            test_fraction: 0.2,
            seed: 42,
        }
    }

    #[test]
    fn saved_model_reloads_and_predicts() {
        let path = std::env::temp_dir().join(format!("hreg_model_{}.json", std::process::id()));
        let file = sample();
        write_model_json(&path, &file).unwrap();
        let back = read_model_json(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(back, file);
        let y = back.model().predict_one(&[1.0, 1.0]).unwrap();
        assert!((y - 0.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_coefficient_count_mismatch() {
        let path = std::env::temp_dir().join(format!("hreg_bad_{}.json", std::process::id()));
        let mut file = sample();
        file.coefficients.pop();
        write_model_json(&path, &file).unwrap();
        let err = read_model_json(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert_eq!(err.exit_code(), 2);
    }
}
