use std::collections::HashMap;

use super::fx_errors::MissingAnchor;
use super::fx_model::ObservedQuote;

/// Reference-currency anchor rates, built once per run and queried O(1)
/// per pair during resolution. Resolving the full pair set is O(n^2)
/// total work over an O(n)-sized index.
pub struct AnchorIndex {
    reference: String,
    rates: HashMap<String, f64>,
}

impl AnchorIndex {
    /// Collects `reference -> X` prices from the normalized batch in a
    /// single pass. The synthetic `reference -> reference = 1` self-entry
    /// lives only inside the index; the caller's batch is never touched.
    /// When a currency is observed more than once, the later observation
    /// wins.
    pub fn build(quotes: &[ObservedQuote], reference: &str) -> Self {
        let mut rates = HashMap::with_capacity(quotes.len() + 1);
        rates.insert(reference.to_string(), 1.0);

        for quote in quotes {
            if quote.base == reference {
                rates.insert(quote.quote.clone(), quote.price);
            }
        }

        Self {
            reference: reference.to_string(),
            rates,
        }
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Number of anchored currencies, the reference included.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// The `reference -> currency` anchor rate, if observed.
    pub fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.get(currency).copied()
    }

    /// Triangulates one pair: `anchor[quote] / anchor[base]`.
    ///
    /// Fails with an explicit [`MissingAnchor`] naming the unanchored
    /// currency when either side is absent; callers skip the pair and
    /// count it rather than receiving a sentinel value.
    pub fn resolve(&self, base: &str, quote: &str) -> Result<f64, MissingAnchor> {
        let base_anchor = self.rate(base).ok_or_else(|| MissingAnchor {
            currency: base.to_string(),
        })?;
        let quote_anchor = self.rate(quote).ok_or_else(|| MissingAnchor {
            currency: quote.to_string(),
        })?;

        Ok(quote_anchor / base_anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn observed(base: &str, quote: &str, price: f64) -> ObservedQuote {
        ObservedQuote {
            base: base.to_string(),
            quote: quote.to_string(),
            price,
            observed_at: Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_reference_self_entry_is_synthesized() {
        let index = AnchorIndex::build(&[], "USD");

        assert_eq!(index.rate("USD"), Some(1.0));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_cross_rate_is_ratio_of_anchors() {
        let quotes = vec![observed("USD", "EUR", 0.9), observed("USD", "GBP", 0.8)];
        let index = AnchorIndex::build(&quotes, "USD");

        let rate = index.resolve("EUR", "GBP").unwrap();
        assert!((rate - 0.8 / 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_pairs_involving_the_reference_resolve() {
        let quotes = vec![observed("USD", "EUR", 0.9)];
        let index = AnchorIndex::build(&quotes, "USD");

        assert_eq!(index.resolve("USD", "EUR").unwrap(), 0.9);
        assert_eq!(index.resolve("EUR", "USD").unwrap(), 1.0 / 0.9);
    }

    #[test]
    fn test_missing_anchor_names_the_unanchored_currency() {
        let quotes = vec![observed("USD", "EUR", 0.9)];
        let index = AnchorIndex::build(&quotes, "USD");

        let err = index.resolve("EUR", "JPY").unwrap_err();
        assert_eq!(err.currency, "JPY");

        let err = index.resolve("JPY", "EUR").unwrap_err();
        assert_eq!(err.currency, "JPY");
    }

    #[test]
    fn test_quotes_not_based_on_reference_contribute_no_anchor() {
        let quotes = vec![observed("EUR", "GBP", 1.1)];
        let index = AnchorIndex::build(&quotes, "USD");

        assert_eq!(index.rate("GBP"), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_later_observation_wins() {
        let quotes = vec![observed("USD", "EUR", 0.9), observed("USD", "EUR", 0.95)];
        let index = AnchorIndex::build(&quotes, "USD");

        assert_eq!(index.rate("EUR"), Some(0.95));
    }
}
