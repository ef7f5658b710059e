//! Mathematical utilities: dense matrix products and Gauss–Jordan inversion.

pub mod inverse;
pub mod matrix;

pub use inverse::*;
pub use matrix::*;
