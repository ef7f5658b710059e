//! Ordinary least squares with an intercept, solved via the normal equation.
//!
//! ```text
//! θ = (XbᵗXb)⁻¹ Xbᵗy      where Xb = [1 | X]
//! ```
//!
//! Two entry points are provided:
//! - [`fit`] returns a [`TrainedModel`] directly, so an unfitted model can never
//!   be asked to predict.
//! - [`LinearRegression`] is a stateful holder (untrained until `fit` succeeds)
//!   for callers that keep a model slot around; its `predict` reports
//!   `ModelNotFitted` when empty.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::domain::{Matrix, Vector};
use crate::error::{RegressionError, RegressionResult};
use crate::math::matrix::dot;
use crate::math::{invert, multiply, multiply_vector, shape, transpose};

/// Fitted intercept and per-feature coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    pub intercept: f64,
    /// One coefficient per design-matrix column, in column order.
    pub coefficients: Vector,
}

impl TrainedModel {
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Predict one value per row of `x`.
    pub fn predict(&self, x: &[Vec<f64>]) -> RegressionResult<Vector> {
        let m = self.n_features();
        x.iter()
            .enumerate()
            .map(|(i, row)| {
                if row.len() != m {
                    return Err(RegressionError::dimension(
                        "predict",
                        format!("{m} features per row"),
                        format!("{} in row {i}", row.len()),
                    ));
                }
                Ok(self.intercept + dot(row, &self.coefficients))
            })
            .collect()
    }

    /// Predict a single observation.
    pub fn predict_one(&self, row: &[f64]) -> RegressionResult<f64> {
        if row.len() != self.n_features() {
            return Err(RegressionError::dimension(
                "predict",
                format!("{} features", self.n_features()),
                row.len(),
            ));
        }
        Ok(self.intercept + dot(row, &self.coefficients))
    }
}

/// Fit an OLS model with intercept to an `n × m` design matrix.
///
/// Requires `len(y) == n` and `n >= m + 1`. Collinear features (or too few
/// distinct observations) surface as `SingularMatrix`.
pub fn fit(x: &[Vec<f64>], y: &[f64]) -> RegressionResult<TrainedModel> {
    let (n, m) = shape(x, "fit")?;
    if y.len() != n {
        return Err(RegressionError::dimension(
            "fit",
            format!("{n} targets (one per row)"),
            y.len(),
        ));
    }
    if n < m + 1 {
        return Err(RegressionError::dimension(
            "fit",
            format!("at least {} observations for {m} features plus intercept", m + 1),
            format!("{n} observations"),
        ));
    }
    debug!("fit: n={n} m={m}");

    let xb = with_intercept_column(x);
    let xbt = transpose(&xb)?;
    let xtx = multiply(&xbt, &xb)?;
    let xtx_inv = invert(&xtx)?;
    let xty = multiply_vector(&xbt, y)?;
    let theta = multiply_vector(&xtx_inv, &xty)?;

    let (intercept, coefficients) = match theta.split_first() {
        Some((b0, rest)) => (*b0, rest.to_vec()),
        None => {
            return Err(RegressionError::dimension("fit", m + 1, 0));
        }
    };
    info!("fitted OLS model on {n} observations x {m} features");

    Ok(TrainedModel {
        intercept,
        coefficients,
    })
}

fn with_intercept_column(x: &[Vec<f64>]) -> Matrix {
    x.iter()
        .map(|row| {
            let mut r = Vec::with_capacity(row.len() + 1);
            r.push(1.0);
            r.extend_from_slice(row);
            r
        })
        .collect()
}

/// Stateful model slot: untrained until a successful `fit`.
#[derive(Debug, Clone, Default)]
pub struct LinearRegression {
    fitted: Option<TrainedModel>,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Fit (or re-fit) the model. On failure the previous parameters are kept.
    pub fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> RegressionResult<&TrainedModel> {
        let model = fit(x, y)?;
        let model: &TrainedModel = self.fitted.insert(model);
        Ok(model)
    }

    pub fn predict(&self, x: &[Vec<f64>]) -> RegressionResult<Vector> {
        self.fitted
            .as_ref()
            .ok_or(RegressionError::ModelNotFitted)?
            .predict(x)
    }

    pub fn trained(&self) -> Option<&TrainedModel> {
        self.fitted.as_ref()
    }

    pub fn into_trained(self) -> RegressionResult<TrainedModel> {
        self.fitted.ok_or(RegressionError::ModelNotFitted)
    }
}
