//! Append-only persistence for raw observations and derived rates.

mod model;
mod repository;

pub use model::{DerivedRateDB, RawQuoteDB};
pub use repository::RateRepository;
