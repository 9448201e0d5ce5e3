//! Market data fetching for FxGrid.
//!
//! This crate supplies raw forex observations to the core: a provider
//! trait plus the CentralCharts price-table implementation. All network
//! access and markup parsing lives here, so the core never performs I/O.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::RawQuote;
pub use provider::{CentralChartsProvider, QuoteProvider};
