//! Dataset sources: the California-housing CSV (file or HTTP) and seeded
//! synthetic linear data.

pub mod housing;
pub mod synthetic;

pub use housing::{HousingData, HousingSource, RowError};
pub use synthetic::generate_linear;
