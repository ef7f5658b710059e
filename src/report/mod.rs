//! Reporting utilities: formatted terminal output for training runs,
//! dataset statistics and single predictions.

pub mod format;

pub use format::*;
