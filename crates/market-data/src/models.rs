use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scraped quote row, untouched: a concatenated 6-character pair
/// symbol and the price cell text exactly as published by the source.
/// Interpretation of both fields is left to the consumer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawQuote {
    pub symbol: String,
    pub price: String,
    pub scraped_at: DateTime<Utc>,
}

impl RawQuote {
    pub fn new(
        symbol: impl Into<String>,
        price: impl Into<String>,
        scraped_at: DateTime<Utc>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price: price.into(),
            scraped_at,
        }
    }
}
