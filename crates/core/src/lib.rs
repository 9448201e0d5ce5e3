//! FxGrid Core - domain models, services, and traits.
//!
//! This crate contains the rate derivation engine for FxGrid. It is
//! database-agnostic and performs no I/O of its own: raw quotes arrive
//! from the `market-data` crate, and persistence happens behind traits
//! implemented by the `storage-sqlite` crate.

pub mod errors;
pub mod fx;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
