use std::collections::BTreeSet;

use super::fx_model::ObservedQuote;

/// The set of distinct currency codes appearing on either side of the
/// normalized quotes, plus the reference currency itself.
pub fn currency_universe(quotes: &[ObservedQuote], reference: &str) -> BTreeSet<String> {
    let mut universe = BTreeSet::new();
    universe.insert(reference.to_string());

    for quote in quotes {
        universe.insert(quote.base.clone());
        universe.insert(quote.quote.clone());
    }

    universe
}

/// All ordered `(base, quote)` pairs over the universe, excluding
/// self-pairs: exactly `n * (n - 1)` entries for `n` currencies, in a
/// deterministic order.
pub fn enumerate_pairs(universe: &BTreeSet<String>) -> Vec<(String, String)> {
    let n = universe.len();
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1));

    for base in universe {
        for quote in universe {
            if base != quote {
                pairs.push((base.clone(), quote.clone()));
            }
        }
    }

    pairs
}
