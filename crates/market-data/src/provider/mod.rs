//! Quote provider trait definitions and implementations.

pub mod central_charts;

pub use central_charts::CentralChartsProvider;

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::RawQuote;

/// Trait for raw quote sources.
///
/// Implement this trait to add support for a new quote source. Consumers
/// treat providers uniformly and know nothing about how rows are
/// obtained.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "CENTRAL_CHARTS". Used for
    /// logging and error reporting.
    fn id(&self) -> &'static str;

    /// Fetch the current quote table in one shot.
    ///
    /// # Returns
    ///
    /// The scraped quote rows on success, or a `MarketDataError` on
    /// failure. An empty table is reported as an error, not an empty
    /// collection.
    async fn fetch_quotes(&self) -> Result<Vec<RawQuote>, MarketDataError>;
}
