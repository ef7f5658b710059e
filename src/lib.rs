//! `house-regress` library crate.
//!
//! The binary (`hreg`) is a thin wrapper around this library so that:
//!
//! - the numeric core (`math`, `models`, `eval`) is testable without spawning processes
//! - data loading and reporting stay separate from the solver
//!
//! Typical flow: load a `Dataset` -> `eval::split` -> `models::fit` ->
//! `TrainedModel::predict` -> `eval::compute_metrics`.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod eval;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod report;
