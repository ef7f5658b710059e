//! Input/output helpers.
//!
//! - model JSON read/write (`model_file`)
//! - prediction exports (CSV) (`export`)

pub mod export;
pub mod model_file;

pub use export::*;
pub use model_file::*;
