//! Seeded synthetic linear datasets.
//!
//! Features are drawn uniformly from `[-10, 10)`; targets follow
//! `intercept + Σ coef_k · x_k + ε` with `ε ~ N(0, noise_std²)`.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::Dataset;
use crate::error::AppError;

pub fn generate_linear(
    n: usize,
    intercept: f64,
    coefficients: &[f64],
    noise_std: f64,
    seed: u64,
) -> Result<Dataset, AppError> {
    if n == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }
    if coefficients.is_empty() {
        return Err(AppError::new(2, "At least one coefficient is required."));
    }
    let normal = Normal::new(0.0, noise_std)
        .map_err(|e| AppError::new(2, format!("Noise distribution error: {e}")))?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut features = Vec::with_capacity(n);
    let mut targets = Vec::with_capacity(n);

    for _ in 0..n {
        let row: Vec<f64> = coefficients
            .iter()
            .map(|_| rng.gen_range(-10.0..10.0))
            .collect();
        let signal: f64 = row.iter().zip(coefficients).map(|(x, c)| x * c).sum();
        targets.push(intercept + signal + normal.sample(&mut rng));
        features.push(row);
    }

    Ok(Dataset {
        feature_names: (1..=coefficients.len()).map(|k| format!("x{k}")).collect(),
        features,
        targets,
    })
}
