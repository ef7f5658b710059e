//! Model evaluation helpers.
//!
//! - train/test partitioning (`split`)
//! - accuracy metrics (`metrics`)
//! - dataset summary statistics (`stats`)

pub mod metrics;
pub mod split;
pub mod stats;

pub use metrics::*;
pub use split::*;
pub use stats::*;
