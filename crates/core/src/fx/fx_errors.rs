use thiserror::Error;

/// Fatal derivation errors, surfaced to the caller.
#[derive(Error, Debug)]
pub enum FxError {
    /// The observed-quote batch was empty; there is no currency universe
    /// to derive against.
    #[error("No observed quotes to derive from")]
    EmptyInput,

    #[error("Invalid currency code: {0}")]
    InvalidCurrencyCode(String),
}

/// Per-record normalization failure. Recovered locally: the row is
/// dropped and counted, never aborting the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedQuote {
    #[error("Unsplittable pair symbol: {0:?}")]
    InvalidSymbol(String),

    #[error("Unparsable or non-positive price: {0:?}")]
    InvalidPrice(String),
}

/// Resolution failure for a pair whose base or quote has no reference
/// anchor. Recovered locally: the pair is skipped and counted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No reference anchor for {currency}")]
pub struct MissingAnchor {
    pub currency: String,
}
