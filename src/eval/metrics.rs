//! Regression accuracy metrics.
//!
//! - `mse  = Σ (t - p)² / n`
//! - `rmse = √mse`
//! - `mae  = Σ |t - p| / n`
//! - `r2   = 1 - SSres / SStot`
//!
//! When every true value is identical, R² is undefined and is reported as
//! `NaN`.

use log::warn;

use crate::domain::Metrics;
use crate::error::{RegressionError, RegressionResult};

pub fn compute_metrics(y_true: &[f64], y_pred: &[f64]) -> RegressionResult<Metrics> {
    if y_true.is_empty() || y_true.len() != y_pred.len() {
        return Err(RegressionError::dimension(
            "compute_metrics",
            format!("two equal, non-zero lengths (true has {})", y_true.len()),
            format!("{} predictions", y_pred.len()),
        ));
    }

    let n = y_true.len() as f64;
    let mut ss_res = 0.0;
    let mut abs_sum = 0.0;
    for (t, p) in y_true.iter().zip(y_pred) {
        let e = t - p;
        ss_res += e * e;
        abs_sum += e.abs();
    }

    let mean = y_true.iter().sum::<f64>() / n;
    let ss_tot: f64 = y_true.iter().map(|t| (t - mean).powi(2)).sum();

    // The rounded mean can sit one ulp off a constant column, leaving a tiny
    // non-zero SStot; test the values themselves.
    let constant = y_true.iter().all(|&t| t == y_true[0]);
    let r2 = if constant || ss_tot == 0.0 {
        warn!("R² undefined: true values have zero variance; reporting NaN");
        f64::NAN
    } else {
        1.0 - ss_res / ss_tot
    };

    let mse = ss_res / n;
    Ok(Metrics {
        mse,
        rmse: mse.sqrt(),
        mae: abs_sum / n,
        r2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_predictions() {
        let m = compute_metrics(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(m.mse, 0.0);
        assert_eq!(m.rmse, 0.0);
        assert_eq!(m.mae, 0.0);
        assert_eq!(m.r2, 1.0);
    }

    #[test]
    fn known_errors() {
        // errors: -1, 0, 2 -> SSres = 5, mean(true) = 2, SStot = 2
        let m = compute_metrics(&[1.0, 2.0, 3.0], &[2.0, 2.0, 1.0]).unwrap();
        assert!((m.mse - 5.0 / 3.0).abs() < 1e-12);
        assert!((m.rmse - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert!((m.mae - 1.0).abs() < 1e-12);
        assert!((m.r2 - (1.0 - 5.0 / 2.0)).abs() < 1e-12);
    }

    #[test]
    fn mean_predictor_has_zero_r2() {
        let m = compute_metrics(&[1.0, 2.0, 3.0, 6.0], &[3.0; 4]).unwrap();
        assert!(m.r2.abs() < 1e-12);
    }

    #[test]
    fn constant_truth_gives_nan_r2() {
        let m = compute_metrics(&[4.0, 4.0, 4.0], &[4.0, 5.0, 3.0]).unwrap();
        assert!(m.r2.is_nan());
        assert!((m.mae - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn constant_truth_with_inexact_mean_gives_nan_r2() {
        for v in [0.1, 0.7, 1.1, 4.526] {
            let m = compute_metrics(&[v; 3], &[v + 0.01, v - 0.02, v]).unwrap();
            assert!(m.r2.is_nan(), "r2 for constant {v} was {}", m.r2);
            assert!(m.mse > 0.0);
        }
    }

    #[test]
    fn length_mismatch_and_empty_are_rejected() {
        assert!(matches!(
            compute_metrics(&[1.0, 2.0], &[1.0]),
            Err(RegressionError::DimensionMismatch { .. })
        ));
        assert!(compute_metrics(&[], &[]).is_err());
    }
}
