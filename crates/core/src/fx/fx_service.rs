use std::sync::Arc;

use async_trait::async_trait;
use fxgrid_market_data::QuoteProvider;

use super::derivation::derive_rates;
use super::fx_model::DerivationReport;
use super::fx_traits::{FxServiceTrait, RateRepositoryTrait};
use crate::errors::Result;

/// Orchestrates one full sync cycle: fetch raw quotes, persist them
/// untouched, derive the pairwise rates, persist the derived batch.
///
/// The derivation step itself is pure; this service sequences the
/// collaborators around it.
#[derive(Clone)]
pub struct FxService {
    provider: Arc<dyn QuoteProvider>,
    repository: Arc<dyn RateRepositoryTrait>,
    reference_currency: String,
}

impl FxService {
    pub fn new(
        provider: Arc<dyn QuoteProvider>,
        repository: Arc<dyn RateRepositoryTrait>,
        reference_currency: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            repository,
            reference_currency: reference_currency.into(),
        }
    }

    pub fn reference_currency(&self) -> &str {
        &self.reference_currency
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    async fn sync_rates(&self) -> Result<DerivationReport> {
        let raw_quotes = self.provider.fetch_quotes().await?;
        log::info!(
            "Fetched {} quotes from {}",
            raw_quotes.len(),
            self.provider.id()
        );

        let stored_raw = self.repository.save_raw_quotes(&raw_quotes).await?;
        log::info!("Stored {} raw observations", stored_raw);

        let report = derive_rates(&raw_quotes, &self.reference_currency)?;

        let stored_derived = self.repository.save_derived_rates(&report.rates).await?;
        log::info!(
            "Derived {}/{} pairs ({} malformed, {} missing anchor), stored {}",
            report.counts.derived,
            report.counts.pairs_requested,
            report.counts.malformed,
            report.counts.missing_anchor,
            stored_derived
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::DerivedRate;
    use chrono::{TimeZone, Utc};
    use fxgrid_market_data::{MarketDataError, RawQuote};
    use std::sync::Mutex;

    struct StubProvider {
        quotes: Vec<RawQuote>,
    }

    #[async_trait]
    impl QuoteProvider for StubProvider {
        fn id(&self) -> &'static str {
            "STUB"
        }

        async fn fetch_quotes(&self) -> std::result::Result<Vec<RawQuote>, MarketDataError> {
            Ok(self.quotes.clone())
        }
    }

    #[derive(Default)]
    struct RecordingRepository {
        raw: Mutex<Vec<RawQuote>>,
        derived: Mutex<Vec<DerivedRate>>,
    }

    #[async_trait]
    impl RateRepositoryTrait for RecordingRepository {
        async fn save_raw_quotes(&self, quotes: &[RawQuote]) -> Result<usize> {
            self.raw.lock().unwrap().extend_from_slice(quotes);
            Ok(quotes.len())
        }

        async fn save_derived_rates(&self, rates: &[DerivedRate]) -> Result<usize> {
            self.derived.lock().unwrap().extend_from_slice(rates);
            Ok(rates.len())
        }

        fn get_latest_derived_rates(&self) -> Result<Vec<DerivedRate>> {
            Ok(self.derived.lock().unwrap().clone())
        }
    }

    fn raw(symbol: &str, price: &str) -> RawQuote {
        let scraped_at = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        RawQuote::new(symbol, price, scraped_at)
    }

    #[tokio::test]
    async fn test_sync_persists_raw_batch_and_derived_snapshot() {
        let provider = Arc::new(StubProvider {
            quotes: vec![raw("USDEUR", "0.9"), raw("USDGBP", "0.8"), raw("junk", "x")],
        });
        let repository = Arc::new(RecordingRepository::default());
        let service = FxService::new(provider, repository.clone(), "USD");

        let report = service.sync_rates().await.unwrap();

        assert_eq!(report.counts.derived, 6);
        assert_eq!(report.counts.malformed, 1);

        // The raw batch is stored untouched, malformed rows included.
        let stored_raw = repository.raw.lock().unwrap();
        assert_eq!(stored_raw.len(), 3);
        assert_eq!(stored_raw[2].symbol, "junk");

        let stored_derived = repository.derived.lock().unwrap();
        assert_eq!(stored_derived.len(), 6);
    }

    #[tokio::test]
    async fn test_sync_surfaces_empty_input() {
        let provider = Arc::new(StubProvider { quotes: vec![] });
        let repository = Arc::new(RecordingRepository::default());
        let service = FxService::new(provider, repository.clone(), "USD");

        let result = service.sync_rates().await;
        assert!(result.is_err());
        assert!(repository.derived.lock().unwrap().is_empty());
    }
}
