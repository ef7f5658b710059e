//! Regression model implementations.

pub mod linear;

pub use linear::*;
