//! Shared "train pipeline" logic used by the `train` and `demo` commands.
//!
//! split -> fit -> predict on the held-out rows -> metrics
//!
//! Everything a run produces is returned in `TrainRun`; callers decide what to
//! print or persist.

use log::info;

use crate::domain::{Dataset, Metrics, Vector};
use crate::error::AppError;
use crate::eval::{Split, compute_metrics, split_seeded};
use crate::models::{TrainedModel, fit};

/// Settings for one training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    pub test_fraction: f64,
    pub seed: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            seed: 42,
        }
    }
}

/// All computed outputs of a single training run.
#[derive(Debug, Clone)]
pub struct TrainRun {
    pub split: Split,
    pub model: TrainedModel,
    /// Predictions for `split.x_test`, in the same order.
    pub predictions: Vector,
    /// `None` when the test partition is empty.
    pub metrics: Option<Metrics>,
}

pub fn run_train(dataset: &Dataset, config: &TrainConfig) -> Result<TrainRun, AppError> {
    let split = split_seeded(
        &dataset.features,
        &dataset.targets,
        config.test_fraction,
        config.seed,
    )?;
    info!(
        "split {} rows into train={} test={} (seed={})",
        dataset.len(),
        split.train_indices.len(),
        split.test_indices.len(),
        config.seed
    );

    let model = fit(&split.x_train, &split.y_train)?;

    let (predictions, metrics) = if split.x_test.is_empty() {
        (Vec::new(), None)
    } else {
        let predictions = model.predict(&split.x_test)?;
        let metrics = compute_metrics(&split.y_test, &predictions)?;
        info!("held-out RMSE={:.4} R2={:.4}", metrics.rmse, metrics.r2);
        (predictions, Some(metrics))
    };

    Ok(TrainRun {
        split,
        model,
        predictions,
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate_linear;

    #[test]
    fn noisy_plane_is_recovered_on_held_out_rows() {
        let data = generate_linear(500, 3.0, &[2.0, -1.0, 0.5], 0.1, 9).unwrap();
        let run = run_train(&data, &TrainConfig::default()).unwrap();

        assert_eq!(run.split.test_indices.len(), 100);
        assert_eq!(run.predictions.len(), 100);
        assert!((run.model.intercept - 3.0).abs() < 0.05);
        assert!((run.model.coefficients[0] - 2.0).abs() < 0.01);
        assert!((run.model.coefficients[1] + 1.0).abs() < 0.01);
        assert!((run.model.coefficients[2] - 0.5).abs() < 0.01);

        let m = run.metrics.unwrap();
        assert!(m.r2 > 0.99);
        assert!(m.rmse < 0.2);
    }

    #[test]
    fn collinear_data_surfaces_as_numeric_error() {
        let features: Vec<Vec<f64>> = (0..50).map(|i| vec![i as f64, 2.0 * i as f64]).collect();
        let data = Dataset {
            feature_names: vec!["a".into(), "b".into()],
            targets: (0..50).map(|i| i as f64).collect(),
            features,
        };
        let err = run_train(&data, &TrainConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("collinear"));
    }

    #[test]
    fn bad_fraction_is_usage_error() {
        let data = generate_linear(20, 0.0, &[1.0], 0.1, 1).unwrap();
        let config = TrainConfig {
            test_fraction: 1.0,
            seed: 1,
        };
        assert_eq!(run_train(&data, &config).unwrap_err().exit_code(), 2);
    }
}
