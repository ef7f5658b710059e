//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the dense `Matrix` / `Vector` aliases consumed by the numeric core
//! - the `Dataset` handed from loaders to the fit pipeline
//! - the `Metrics` record and the housing `FeatureName` catalogue

pub mod types;

pub use types::*;
