use async_trait::async_trait;
use fxgrid_market_data::RawQuote;

use super::fx_model::{DerivationReport, DerivedRate};
use crate::errors::Result;

/// Trait defining the contract for rate persistence.
///
/// Raw observations and derived rates are stored as independent,
/// append-only batches; nothing is merged into prior runs.
#[async_trait]
pub trait RateRepositoryTrait: Send + Sync {
    /// Persists the untouched ingested batch for auditability.
    async fn save_raw_quotes(&self, quotes: &[RawQuote]) -> Result<usize>;

    /// Persists one run's derived snapshot.
    async fn save_derived_rates(&self, rates: &[DerivedRate]) -> Result<usize>;

    /// The most recent run's derived batch, for downstream consumers.
    fn get_latest_derived_rates(&self) -> Result<Vec<DerivedRate>>;
}

/// Trait defining the contract for FX sync operations.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    /// Runs one fetch-derive-persist cycle and returns its report.
    async fn sync_rates(&self) -> Result<DerivationReport>;
}
