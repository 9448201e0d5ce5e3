//! FX (Foreign Exchange) module - derivation engine, domain models, and traits.

mod derivation;
mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;
mod normalizer;
mod pairs;
mod resolver;

pub use derivation::derive_rates;
pub use fx_errors::{FxError, MalformedQuote, MissingAnchor};
pub use fx_model::{DerivationCounts, DerivationReport, DerivedRate, ObservedQuote};
pub use fx_service::FxService;
pub use fx_traits::{FxServiceTrait, RateRepositoryTrait};
pub use normalizer::normalize_quote;
pub use pairs::{currency_universe, enumerate_pairs};
pub use resolver::AnchorIndex;
