//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching raw quotes from a source.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// A network error occurred while communicating with the source.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The source responded but carried no quote rows.
    #[error("No quotes returned by {provider}")]
    NoData {
        /// The provider whose response was empty
        provider: String,
    },
}
