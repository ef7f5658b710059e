//! Error types.
//!
//! - `RegressionError` is returned by the numeric core (matrix ops, solver,
//!   metrics, splitting). Every variant is recoverable and carries enough
//!   context to diagnose the failing call.
//! - `AppError` is the CLI-facing error: a message plus the process exit code.

use thiserror::Error;

pub type RegressionResult<T> = Result<T, RegressionError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: String,
        actual: String,
    },
    #[error("singular matrix: pivot in column {pivot_index} is numerically zero")]
    SingularMatrix { pivot_index: usize },
    #[error("model has not been fitted")]
    ModelNotFitted,
    #[error("invalid split: test fraction {fraction} must lie in (0, 1) over a non-empty dataset (n={n})")]
    InvalidSplitFraction { fraction: f64, n: usize },
}

impl RegressionError {
    pub fn dimension(
        context: &'static str,
        expected: impl std::fmt::Display,
        actual: impl std::fmt::Display,
    ) -> Self {
        RegressionError::DimensionMismatch {
            context,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<RegressionError> for AppError {
    fn from(err: RegressionError) -> Self {
        match err {
            RegressionError::SingularMatrix { .. } => AppError::new(
                4,
                format!("Model cannot be fit: collinear or insufficient data ({err})."),
            ),
            RegressionError::InvalidSplitFraction { .. } => AppError::new(2, err.to_string()),
            RegressionError::DimensionMismatch { .. } | RegressionError::ModelNotFitted => {
                AppError::new(4, err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singular_maps_to_numeric_exit_code() {
        let app: AppError = RegressionError::SingularMatrix { pivot_index: 2 }.into();
        assert_eq!(app.exit_code(), 4);
        assert!(app.to_string().contains("collinear"));
        assert!(app.to_string().contains("column 2"));
    }

    #[test]
    fn split_fraction_maps_to_usage_exit_code() {
        let app: AppError = RegressionError::InvalidSplitFraction { fraction: 1.5, n: 10 }.into();
        assert_eq!(app.exit_code(), 2);
    }

    #[test]
    fn dimension_message_names_both_sides() {
        let err = RegressionError::dimension("multiply", "3 rows", "2 rows");
        let msg = err.to_string();
        assert!(msg.contains("multiply") && msg.contains("3 rows") && msg.contains("2 rows"));
    }
}
